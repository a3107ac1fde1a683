//! Request execution shared by every public `ApiClient` method
//!
//! [`Executor`] owns the transport and the ports but not the refresh
//! coordinator: the coordinator's refresher is built on the executor, so the
//! coordinator is passed in per request instead of stored here.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use repairminder_core::{
    ConsentNotifier, RefreshCoordinator, ResponseObserver, ResponseRecord, TokenRefresher,
    TokenStore,
};
use repairminder_domain::constants::{
    BEARER_PREFIX, CONSENT_REQUIRED_CODE, HEADER_AUTHORIZATION, HEADER_RETRY_AFTER,
};
use repairminder_domain::{
    ApiEnvelope, ApiError, Endpoint, ErrorEnvelope, HttpMethod, RefreshRequest, RefreshResponse,
};
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use super::body::RequestBody;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Status, `Retry-After` and body of one received response
struct Exchange {
    status: u16,
    retry_after: Option<u64>,
    body: Vec<u8>,
}

pub(crate) struct Executor {
    pub(crate) http: HttpClient,
    /// Validated origin without a trailing slash
    pub(crate) base_url: String,
    pub(crate) store: Arc<dyn TokenStore>,
    pub(crate) consent: Arc<dyn ConsentNotifier>,
    pub(crate) observer: Arc<dyn ResponseObserver>,
    pub(crate) refresh_threshold_seconds: i64,
}

impl Executor {
    /// Send `endpoint` and return the raw body of a 2xx response
    ///
    /// `refresh` is `None` for the refresh call itself, which must never
    /// trigger a nested refresh. Otherwise a 401 on an authenticated endpoint
    /// goes through the coordinator and the request is resent once; the
    /// retry carries no coordinator, so a second 401 is final. A request
    /// that was already refreshed before its first send gets no 401
    /// recovery either.
    pub(crate) async fn perform_request(
        &self,
        endpoint: &Endpoint,
        body: &RequestBody,
        refresh: Option<&RefreshCoordinator>,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, ApiError> {
        let payload = body.bytes()?;
        let url = self.resolve(endpoint)?;

        let mut refreshed = false;
        if let Some(coordinator) = refresh {
            refreshed = self.refresh_if_expiring(endpoint, coordinator, cancel).await?;
        }

        let mut recovery = refresh.filter(|_| endpoint.requires_auth() && !refreshed);
        let mut attempt: u8 = 1;

        loop {
            let exchange = self.send_once(endpoint, &url, payload, attempt, cancel).await?;

            if (200..300).contains(&exchange.status) {
                return Ok(exchange.body);
            }

            if exchange.status != 401 {
                return Err(self.status_error(exchange));
            }

            let Some(coordinator) = recovery.take() else {
                debug!(attempt, "401 is final for this request");
                return Err(ApiError::Unauthorized);
            };

            info!("access token rejected, refreshing session");
            match coordinator.ensure_fresh_token(cancel).await {
                Ok(()) => attempt += 1,
                Err(ApiError::Cancelled) => return Err(ApiError::Cancelled),
                Err(err) => {
                    warn!(error = %err, "session refresh failed");
                    return Err(ApiError::Unauthorized);
                }
            }
        }
    }

    /// Build the full request URL, omitting `?` when there is no query
    fn resolve(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
            .map_err(|err| ApiError::from(InfraError::from(err)))?;

        let query = endpoint.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(&query);
        }

        Ok(url)
    }

    /// Refresh before sending when the store reports the access token is
    /// about to expire; `true` when a refresh ran
    async fn refresh_if_expiring(
        &self,
        endpoint: &Endpoint,
        coordinator: &RefreshCoordinator,
        cancel: &CancellationToken,
    ) -> Result<bool, ApiError> {
        if !endpoint.requires_auth() || self.store.refresh_token().is_none() {
            return Ok(false);
        }
        let Some(expires_at) = self.store.expires_at() else {
            return Ok(false);
        };

        let remaining = (expires_at - Utc::now()).num_seconds();
        if remaining > self.refresh_threshold_seconds {
            return Ok(false);
        }

        info!(remaining_seconds = remaining, "access token near expiry, refreshing before send");
        match coordinator.ensure_fresh_token(cancel).await {
            Ok(()) => Ok(true),
            Err(ApiError::Cancelled) => Err(ApiError::Cancelled),
            Err(_) => Err(ApiError::Unauthorized),
        }
    }

    async fn send_once(
        &self,
        endpoint: &Endpoint,
        url: &Url,
        payload: Option<&[u8]>,
        attempt: u8,
        cancel: &CancellationToken,
    ) -> Result<Exchange, ApiError> {
        let method = endpoint.method();
        let mut request = self.http.request(reqwest_method(method), url.clone());

        if endpoint.requires_auth() {
            if let Some(token) = self.store.access_token() {
                request = request.header(HEADER_AUTHORIZATION, format!("{BEARER_PREFIX}{token}"));
            }
        }
        if let Some(bytes) = payload {
            request = request.body(bytes.to_vec());
        }

        let started = Instant::now();
        let round_trip = async {
            let response = self.http.send(request).await?;
            let status = response.status().as_u16();
            let retry_after = response
                .headers()
                .get(HEADER_RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok());
            let body =
                response.bytes().await.map_err(|err| ApiError::from(InfraError::from(err)))?;
            Ok::<_, ApiError>(Exchange { status, retry_after, body: body.to_vec() })
        };

        let exchange = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(attempt, "request cancelled");
                return Err(ApiError::Cancelled);
            }
            result = round_trip => result?,
        };

        self.observer.on_response(&ResponseRecord {
            method,
            url: url.to_string(),
            status: exchange.status,
            elapsed: started.elapsed(),
            body_len: exchange.body.len(),
            attempt,
        });

        Ok(exchange)
    }

    /// Map a non-2xx, non-401 response onto the taxonomy
    fn status_error(&self, exchange: Exchange) -> ApiError {
        let envelope = ErrorEnvelope::from_slice(&exchange.body).unwrap_or_default();

        match exchange.status {
            403 => {
                if envelope.code.as_deref() == Some(CONSENT_REQUIRED_CODE) {
                    warn!("server requires consent");
                    self.consent.consent_required();
                }
                ApiError::Forbidden { message: envelope.server_message(), code: envelope.code }
            }
            404 => ApiError::NotFound,
            429 => {
                warn!(retry_after = ?exchange.retry_after, "rate limited");
                ApiError::RateLimited { retry_after: exchange.retry_after }
            }
            status => ApiError::HttpError { status, message: envelope.server_message() },
        }
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Refresher that calls the refresh endpoint through the executor
///
/// Runs without a coordinator and with its own cancellation token: the
/// refresh belongs to every waiter, not to the caller that started it.
pub(crate) struct SessionRefresher {
    pub(crate) executor: Arc<Executor>,
}

#[async_trait]
impl TokenRefresher for SessionRefresher {
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        let body = RequestBody::json(&RefreshRequest { refresh_token: refresh_token.to_string() });
        let bytes = self
            .executor
            .perform_request(&Endpoint::RefreshToken, &body, None, &CancellationToken::new())
            .await?;

        let envelope: ApiEnvelope<RefreshResponse> = serde_json::from_slice(&bytes)?;
        let (response, _, _) = envelope.into_parts()?;
        Ok(response)
    }
}
