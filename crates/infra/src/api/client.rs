//! Repair Minder API client
//!
//! Every endpoint goes through one of the `execute*` methods, which differ
//! only in how the 2xx body is decoded. Status mapping, the single 401
//! retry and cancellation are shared.

use std::sync::Arc;

use repairminder_core::{
    ConsentNotifier, NoopConsentNotifier, NoopResponseObserver, RefreshCoordinator,
    ResponseObserver, TokenStore,
};
use repairminder_domain::constants::{CONTENT_TYPE_JSON, HEADER_CLIENT_INFO};
use repairminder_domain::{
    ApiEnvelope, ApiError, ApiResult, EmptyPayload, Endpoint, EnvelopeParts, Pagination,
    RepairMinderError,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};
use url::Url;

use super::body::RequestBody;
use super::executor::{Executor, SessionRefresher};
use crate::config::ApiClientConfig;
use crate::http::HttpClient;

/// API client with single-flight token refresh
///
/// Cheap to clone; clones share the transport, the ports and the refresh
/// coordinator.
#[derive(Clone)]
pub struct ApiClient {
    executor: Arc<Executor>,
    coordinator: RefreshCoordinator,
    cancel: CancellationToken,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.executor.base_url)
            .field("coordinator", &self.coordinator)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

impl ApiClient {
    /// Create a client with no consent or response hooks
    ///
    /// # Errors
    ///
    /// [`RepairMinderError::Config`] for an unusable base URL or client
    /// identifier.
    pub fn new(
        config: ApiClientConfig,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self, RepairMinderError> {
        Self::builder().config(config).token_store(token_store).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Clone of this client whose requests stop when `cancel` fires
    ///
    /// The clone shares the refresh coordinator, so a refresh started by one
    /// handle still serves the others.
    #[must_use]
    pub fn with_cancellation(&self, cancel: CancellationToken) -> Self {
        Self { cancel, ..self.clone() }
    }

    /// Token that cancels every request made through this handle
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn base_url(&self) -> &str {
        &self.executor.base_url
    }

    pub fn refresh_coordinator(&self) -> &RefreshCoordinator {
        &self.coordinator
    }

    /// Execute a request and decode the envelope's `data`
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]: the status mapping, [`ApiError::ServerError`] for
    /// `success: false`, [`ApiError::DecodingFailed`] for a body that does
    /// not match `T`.
    #[instrument(skip_all, fields(endpoint = %endpoint.label()))]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> ApiResult<T> {
        let envelope: ApiEnvelope<T> = self.fetch_envelope(endpoint, &body).await?;
        let (data, _, _) = envelope.into_parts()?;
        Ok(data)
    }

    /// Execute a list request, keeping the pagination block
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::execute`].
    #[instrument(skip_all, fields(endpoint = %endpoint.label()))]
    pub async fn execute_with_pagination<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> ApiResult<(T, Option<Pagination>)> {
        let envelope: ApiEnvelope<T> = self.fetch_envelope(endpoint, &body).await?;
        let (data, pagination, _) = envelope.into_parts()?;
        Ok((data, pagination))
    }

    /// Execute a list request, keeping pagination and the echoed filters
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::execute`]; a `filters` object that does not match
    /// `F` is a decoding failure.
    #[instrument(skip_all, fields(endpoint = %endpoint.label()))]
    pub async fn execute_with_filters<T, F>(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> ApiResult<EnvelopeParts<T, F>>
    where
        T: DeserializeOwned,
        F: DeserializeOwned,
    {
        let envelope: ApiEnvelope<T, F> = self.fetch_envelope(endpoint, &body).await?;
        envelope.into_parts()
    }

    /// Execute a request whose payload is not needed
    ///
    /// Only the envelope's `success` flag is checked. An empty 2xx body
    /// counts as success.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::execute`].
    #[instrument(skip_all, fields(endpoint = %endpoint.label()))]
    pub async fn execute_void(&self, endpoint: &Endpoint, body: RequestBody) -> ApiResult<()> {
        let bytes = self.send(endpoint, &body).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        decode::<ApiEnvelope<EmptyPayload>>(&bytes)?.into_acknowledged()
    }

    /// Execute a request and return the 2xx body undecoded
    ///
    /// Used for document downloads.
    ///
    /// # Errors
    ///
    /// The status mapping only; the body is never inspected.
    #[instrument(skip_all, fields(endpoint = %endpoint.label()))]
    pub async fn execute_raw(&self, endpoint: &Endpoint, body: RequestBody) -> ApiResult<Vec<u8>> {
        self.send(endpoint, &body).await
    }

    /// Execute a request whose 2xx body is `T` itself, with no envelope
    ///
    /// # Errors
    ///
    /// The status mapping, or [`ApiError::DecodingFailed`].
    #[instrument(skip_all, fields(endpoint = %endpoint.label()))]
    pub async fn execute_direct<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> ApiResult<T> {
        let bytes = self.send(endpoint, &body).await?;
        decode(&bytes)
    }

    /// Refresh the session now, joining any refresh already in flight
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] when there is no refresh token or the
    /// refresh fails (the store has been cleared), [`ApiError::Cancelled`]
    /// when this handle is cancelled first.
    #[instrument(skip_all)]
    pub async fn refresh_session(&self) -> ApiResult<()> {
        info!("explicit session refresh requested");
        self.coordinator.ensure_fresh_token(&self.cancel).await
    }

    async fn fetch_envelope<T, F>(
        &self,
        endpoint: &Endpoint,
        body: &RequestBody,
    ) -> ApiResult<ApiEnvelope<T, F>>
    where
        T: DeserializeOwned,
        F: DeserializeOwned,
    {
        let bytes = self.send(endpoint, body).await?;
        decode(&bytes)
    }

    async fn send(&self, endpoint: &Endpoint, body: &RequestBody) -> ApiResult<Vec<u8>> {
        self.executor.perform_request(endpoint, body, Some(&self.coordinator), &self.cancel).await
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(bytes).map_err(|err| {
        debug!(error = %err, body_len = bytes.len(), "response body did not decode");
        ApiError::from(err)
    })
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    token_store: Option<Arc<dyn TokenStore>>,
    consent_notifier: Option<Arc<dyn ConsentNotifier>>,
    response_observer: Option<Arc<dyn ResponseObserver>>,
    cancel: Option<CancellationToken>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential store (required)
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    pub fn consent_notifier(mut self, notifier: Arc<dyn ConsentNotifier>) -> Self {
        self.consent_notifier = Some(notifier);
        self
    }

    pub fn response_observer(mut self, observer: Arc<dyn ResponseObserver>) -> Self {
        self.response_observer = Some(observer);
        self
    }

    pub fn cancellation_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// [`RepairMinderError::Config`] if the token store is missing, the base
    /// URL cannot be used as a base, or the HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient, RepairMinderError> {
        let config = self.config.unwrap_or_default();
        let store = self
            .token_store
            .ok_or_else(|| RepairMinderError::Config("Token store not set".to_string()))?;

        let base_url = validate_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(
            HEADER_CLIENT_INFO,
            HeaderValue::from_str(&config.client_identifier).map_err(|e| {
                RepairMinderError::Config(format!("Invalid client identifier: {e}"))
            })?,
        );

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(config.client_identifier.clone())
            .default_headers(headers)
            .build()?;

        let executor = Arc::new(Executor {
            http,
            base_url,
            store: store.clone(),
            consent: self.consent_notifier.unwrap_or_else(|| Arc::new(NoopConsentNotifier)),
            observer: self.response_observer.unwrap_or_else(|| Arc::new(NoopResponseObserver)),
            refresh_threshold_seconds: config.refresh_threshold_seconds,
        });

        let refresher = Arc::new(SessionRefresher { executor: executor.clone() });
        let coordinator = RefreshCoordinator::new(store, refresher);

        debug!(base_url = %executor.base_url, timeout = ?config.timeout, "API client created");

        Ok(ApiClient { executor, coordinator, cancel: self.cancel.unwrap_or_default() })
    }
}

/// Trim the trailing slash and check the origin parses as a base URL
fn validate_base_url(raw: &str) -> Result<String, RepairMinderError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| RepairMinderError::Config(format!("Invalid base URL {trimmed:?}: {e}")))?;
    if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
        return Err(RepairMinderError::Config(format!(
            "Base URL must be an http(s) origin: {trimmed:?}"
        )));
    }
    Ok(trimmed.to_string())
}
