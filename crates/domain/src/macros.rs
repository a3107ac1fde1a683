//! Macro for wire-value enums
//!
//! Filter and path-segment enums in the endpoint catalog all need the same
//! three things: a `&'static str` wire value, `Display`, and a
//! case-insensitive `FromStr`. This macro provides them from one mapping.
//!
//! # Example
//!
//! ```rust
//! use repairminder_domain::impl_wire_value_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum TicketStatus {
//!     Open,
//!     Closed,
//! }
//!
//! impl_wire_value_conversions!(TicketStatus {
//!     Open => "open",
//!     Closed => "closed",
//! });
//!
//! assert_eq!(TicketStatus::Open.as_str(), "open");
//! ```

/// Implements `as_str`, `Display` and `FromStr` for wire-value enums
///
/// # Features
///
/// - `as_str()` is `const` and total over the listed variants
/// - Case-insensitive parsing (e.g., "REPAIR", "repair", "Repair" all work)
/// - Descriptive error messages with the enum name
#[macro_export]
macro_rules! impl_wire_value_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Value as sent on the wire
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
