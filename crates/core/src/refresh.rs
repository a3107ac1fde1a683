//! Single-flight token refresh
//!
//! [`RefreshCoordinator`] guarantees that at most one refresh-token call is
//! in flight. Callers that find the access token rejected while a refresh is
//! running join the pending queue and share that refresh's outcome instead of
//! issuing their own call; with rotating refresh tokens, parallel refreshes
//! would invalidate each other.
//!
//! The refresh runs on a spawned task, so dropping or cancelling the caller
//! that started it does not strand the others. The credential store is
//! written (or cleared) before any waiter is released.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use repairminder_domain::{ApiError, CredentialPair};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::ports::{TokenRefresher, TokenStore};

type Outcome = Result<(), ApiError>;

struct Waiter {
    id: u64,
    tx: oneshot::Sender<Outcome>,
}

/// Idle when `refreshing` is false; the queue is empty whenever idle.
#[derive(Default)]
struct RefreshState {
    refreshing: bool,
    waiters: VecDeque<Waiter>,
    next_waiter_id: u64,
    cycles: u64,
}

struct Shared {
    state: Mutex<RefreshState>,
    store: Arc<dyn TokenStore>,
    refresher: Arc<dyn TokenRefresher>,
}

/// Coordinates refresh-token calls across concurrent requests
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct RefreshCoordinator {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("RefreshCoordinator")
            .field("refreshing", &state.refreshing)
            .field("pending_waiters", &state.waiters.len())
            .field("cycles", &state.cycles)
            .finish()
    }
}

impl RefreshCoordinator {
    /// Create an idle coordinator over the given store and refresher
    pub fn new(store: Arc<dyn TokenStore>, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(RefreshState::default()),
                store,
                refresher,
            }),
        }
    }

    /// Wait until the current refresh (or a new one started here) settles
    ///
    /// Starts a refresh when idle, otherwise joins the one in flight.
    ///
    /// # Errors
    /// - [`ApiError::Unauthorized`] when the refresh failed; the store has
    ///   already been cleared
    /// - [`ApiError::Cancelled`] when `cancel` fires first; the caller leaves
    ///   the queue and the refresh continues for everyone else
    #[instrument(name = "ensure_fresh_token", skip_all)]
    pub async fn ensure_fresh_token(&self, cancel: &CancellationToken) -> Result<(), ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let (id, rx) = self.enqueue();
        let _guard = QueueGuard { shared: &self.shared, id };

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(waiter = id, "Refresh wait cancelled");
                Err(ApiError::Cancelled)
            }
            // A dropped sender means the refresh task died without an outcome
            outcome = rx => outcome.unwrap_or(Err(ApiError::Unauthorized)),
        }
    }

    /// Whether a refresh is in flight
    pub fn is_refreshing(&self) -> bool {
        self.shared.state.lock().refreshing
    }

    /// Number of callers waiting on the current refresh
    pub fn pending_waiters(&self) -> usize {
        self.shared.state.lock().waiters.len()
    }

    /// Number of refresh calls started since creation
    pub fn refresh_cycles(&self) -> u64 {
        self.shared.state.lock().cycles
    }

    fn enqueue(&self) -> (u64, oneshot::Receiver<Outcome>) {
        let (tx, rx) = oneshot::channel();
        let (id, start) = {
            let mut state = self.shared.state.lock();
            let id = state.next_waiter_id;
            state.next_waiter_id += 1;
            state.waiters.push_back(Waiter { id, tx });

            let start = !state.refreshing;
            if start {
                state.refreshing = true;
                state.cycles += 1;
            }
            (id, start)
        };

        if start {
            debug!(waiter = id, "Starting token refresh");
            tokio::spawn(run_refresh(Arc::clone(&self.shared)));
        } else {
            debug!(waiter = id, "Joining in-flight token refresh");
        }
        (id, rx)
    }
}

async fn run_refresh(shared: Arc<Shared>) {
    let mut cycle = CycleGuard { shared: Arc::clone(&shared), outcome: None };

    let result = match shared.store.refresh_token() {
        Some(refresh_token) => shared.refresher.refresh(&refresh_token).await,
        None => {
            warn!("No refresh token available");
            Err(ApiError::Unauthorized)
        }
    };

    let credentials =
        result.and_then(|response| CredentialPair::from_refresh(response, Utc::now()));

    let outcome = match credentials {
        Ok(credentials) => {
            shared.store.update_tokens(&credentials);
            info!(expires_at = %credentials.expires_at, "Access token refreshed");
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "Token refresh failed, clearing credentials");
            shared.store.clear_tokens();
            Err(ApiError::Unauthorized)
        }
    };

    cycle.outcome = Some(outcome);
}

/// Releases the queue when a refresh cycle ends
///
/// Runs on drop so a panicking or aborted refresh still returns the
/// coordinator to idle; without an outcome the senders are dropped and every
/// waiter sees `Unauthorized`.
struct CycleGuard {
    shared: Arc<Shared>,
    outcome: Option<Outcome>,
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        let waiters = {
            let mut state = self.shared.state.lock();
            state.refreshing = false;
            std::mem::take(&mut state.waiters)
        };

        debug!(waiters = waiters.len(), "Releasing refresh waiters");
        let Some(outcome) = self.outcome.take() else {
            return;
        };
        for waiter in waiters {
            // Receiver gone means the waiter was dropped mid-release
            let _ = waiter.tx.send(outcome.clone());
        }
    }
}

/// Removes a waiter from the queue when its wait ends for any reason
struct QueueGuard<'a> {
    shared: &'a Shared,
    id: u64,
}

impl Drop for QueueGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock();
        state.waiters.retain(|waiter| waiter.id != self.id);
    }
}
