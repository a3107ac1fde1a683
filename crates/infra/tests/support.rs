//! Shared fixtures for the API client integration tests

use std::sync::Arc;
use std::time::Duration;

use repairminder_core::testing::{
    MemoryTokenStore, RecordingConsentNotifier, RecordingResponseObserver,
};
use repairminder_infra::{ApiClient, ApiClientConfig};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ORDER_PATH: &str = "/api/orders/ord-1";
pub const REFRESH_PATH: &str = "/api/auth/refresh";

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub status: String,
}

/// Client wired to a mock server with recording ports
pub struct Harness {
    pub server: MockServer,
    pub client: ApiClient,
    pub store: Arc<MemoryTokenStore>,
    pub consent: Arc<RecordingConsentNotifier>,
    pub observer: Arc<RecordingResponseObserver>,
}

impl Harness {
    /// Signed in with `access-1` / `refresh-1`
    pub async fn signed_in() -> Self {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryTokenStore::signed_in("access-1", "refresh-1"));
        let consent = Arc::new(RecordingConsentNotifier::default());
        let observer = Arc::new(RecordingResponseObserver::default());

        let client = ApiClient::builder()
            .config(ApiClientConfig::with_base_url(server.uri()))
            .token_store(store.clone())
            .consent_notifier(consent.clone())
            .response_observer(observer.clone())
            .build()
            .expect("client should build");

        Self { server, client, store, consent, observer }
    }

    /// Number of requests the server has seen on `route`
    pub async fn hits(&self, route: &str) -> usize {
        self.server
            .received_requests()
            .await
            .expect("request recording enabled")
            .iter()
            .filter(|request| request.url.path() == route)
            .count()
    }
}

pub fn order_body() -> serde_json::Value {
    json!({ "success": true, "data": { "id": "ord-1", "status": "in_repair" } })
}

/// `GET /api/orders/ord-1` answers 401 to `access-1` and 200 to `access-2`
pub async fn mount_order_accepting_rotated_token(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(ORDER_PATH))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(ORDER_PATH))
        .and(header("Authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body()))
        .mount(server)
        .await;
}

/// Successful rotation to `access-2` / `refresh-2`, answered after `delay`
pub async fn mount_refresh_success(server: &MockServer, delay: Duration, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "success": true,
                    "data": {
                        "token": "access-2",
                        "refresh_token": "refresh-2",
                        "expires_in": 3600
                    }
                }))
                .set_delay(delay),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Refresh endpoint failing with `status`, answered after `delay`
pub async fn mount_refresh_failure(
    server: &MockServer,
    status: u16,
    delay: Duration,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({ "success": false, "error": "refresh token revoked" }))
                .set_delay(delay),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}
