use repairminder_core::{ResponseObserver, ResponseRecord};
use tracing::{debug, warn};

/// Response hook that emits one `tracing` event per HTTP exchange
///
/// 2xx responses log at debug, everything else at warn. Bodies are never
/// logged, only their length.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingResponseObserver;

impl ResponseObserver for TracingResponseObserver {
    fn on_response(&self, record: &ResponseRecord) {
        let elapsed_ms = u64::try_from(record.elapsed.as_millis()).unwrap_or(u64::MAX);
        if (200..300).contains(&record.status) {
            debug!(
                method = %record.method,
                url = %record.url,
                status = record.status,
                elapsed_ms,
                body_len = record.body_len,
                attempt = record.attempt,
                "API response"
            );
        } else {
            warn!(
                method = %record.method,
                url = %record.url,
                status = record.status,
                elapsed_ms,
                body_len = record.body_len,
                attempt = record.attempt,
                "API response with error status"
            );
        }
    }
}
