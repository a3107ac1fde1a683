//! Ordered query-string builder
//!
//! Values are kept raw here; percent-encoding happens when the executor
//! attaches the pairs to a URL.

/// Insertion-ordered list of query pairs that drops absent values
///
/// - `None` and empty strings are omitted
/// - numbers are rendered in base-10
/// - flags are rendered as `"true"` when set and omitted otherwise
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Start an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string parameter unless it is absent or empty
    #[must_use]
    pub fn push_str(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Append a required numeric parameter
    #[must_use]
    pub fn push_num(mut self, key: &str, value: impl Into<u64>) -> Self {
        self.pairs.push((key.to_string(), value.into().to_string()));
        self
    }

    /// Append a boolean "include" flag, only when set
    #[must_use]
    pub fn push_flag(mut self, key: &str, enabled: bool) -> Self {
        if enabled {
            self.pairs.push((key.to_string(), "true".to_string()));
        }
        self
    }

    /// Whether no parameter survived
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Vec<(String, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_and_empty_strings() {
        let query = QueryBuilder::new()
            .push_str("status", None)
            .push_str("search", Some(""))
            .push_str("engineer_id", Some("eng-1"))
            .build();

        assert_eq!(query, vec![("engineer_id".to_string(), "eng-1".to_string())]);
    }

    #[test]
    fn renders_numbers_in_decimal() {
        let query = QueryBuilder::new().push_num("page", 12u32).push_num("limit", 100u32).build();

        assert_eq!(query[0].1, "12");
        assert_eq!(query[1].1, "100");
    }

    #[test]
    fn flags_never_render_false() {
        let query = QueryBuilder::new()
            .push_flag("show_archived", false)
            .push_flag("include_breakdown", true)
            .build();

        assert_eq!(query, vec![("include_breakdown".to_string(), "true".to_string())]);
    }

    #[test]
    fn preserves_insertion_order() {
        let keys: Vec<_> = QueryBuilder::new()
            .push_num("page", 1u32)
            .push_num("limit", 20u32)
            .push_str("search", Some("iphone"))
            .build()
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        assert_eq!(keys, ["page", "limit", "search"]);
    }
}
