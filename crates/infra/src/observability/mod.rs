//! Logging setup and the tracing-backed response hook
//!
//! The access layer logs through `tracing` everywhere. Embedding
//! applications that have no subscriber of their own can call
//! [`init_tracing`] once at startup.

mod response_log;

pub use response_log::TracingResponseObserver;

/// Environment variable holding the `EnvFilter` directives
pub const LOG_FILTER_ENV: &str = "REPAIRMINDER_LOG";

/// Environment variable selecting the output format (`json` or `pretty`)
pub const LOG_FORMAT_ENV: &str = "REPAIRMINDER_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, for log shipping
    Json,
    /// Human-readable output
    #[default]
    Pretty,
}

impl LogFormat {
    /// Parse a format name, falling back to [`LogFormat::Pretty`]
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown {LOG_FORMAT_ENV}={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// Read from `REPAIRMINDER_LOG_FORMAT`
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(val) => Self::parse(&val),
            Err(_) => Self::default(),
        }
    }
}

/// Install a global subscriber
///
/// Filter directives come from `REPAIRMINDER_LOG` and default to `info`.
/// Returns `false` when a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_tracing(format: LogFormat) -> bool {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::Layer as _;

    let env_filter = tracing_subscriber::EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init().is_ok()
}
