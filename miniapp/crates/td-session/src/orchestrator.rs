//! Session bootstrap and refresh.
//!
//! One cycle walks a short ladder: probe `whoami`; on an auth failure, a
//! network failure or an unreadable answer try a cookie refresh; failing that, exchange the host identity
//! payload. Refresh and exchange each run at most once per cycle and a probe
//! is repeated only after one of them succeeds, so a cycle makes at most
//! three probes.

use crate::{
    AbortSignal, HostEnvironment, IdentitySource, SessionApi, SessionError, SessionErrorResult,
    SessionPhase, SessionSnapshot,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use td_client::ProbeOutcome;
use td_config::Config;
use td_core::User;
use tokio::sync::{Mutex, OnceCell, watch};

/// Id of the stand-in user served when the API cannot be reached in development
pub const DEV_PLACEHOLDER_USER_ID: &str = "dev-user-id";

const DEV_PLACEHOLDER_TELEGRAM_ID: i64 = 123_456_789;

/// Stand-in user for offline development
pub fn placeholder_user() -> User {
    User {
        id: DEV_PLACEHOLDER_USER_ID.to_string(),
        telegram_id: DEV_PLACEHOLDER_TELEGRAM_ID,
        username: Some("test_user".to_string()),
        first_name: "Test".to_string(),
        last_name: Some("User".to_string()),
        email: None,
        language_code: Some("en".to_string()),
        is_new: true,
        is_preferences: false,
        created_at: None,
        updated_at: None,
        profile: None,
        preferences: None,
        photos: Vec::new(),
    }
}

/// Which earlier cycle a waiting caller may take its result from
#[derive(Debug, Clone, Copy)]
enum Join {
    /// Any cycle that finished while the caller waited
    InFlight,
    /// Only a cycle that started after the caller arrived
    StartedAfter,
}

pub struct SessionOrchestrator<A: SessionApi> {
    api: Arc<A>,
    identity: IdentitySource,
    dev_fallback: bool,
    abort: AbortSignal,
    state_tx: watch::Sender<SessionSnapshot>,
    /// Held for the duration of a cycle
    cycle_lock: Mutex<()>,
    started_cycles: AtomicU64,
    completed_cycles: AtomicU64,
    bootstrapped: OnceCell<()>,
}

impl<A: SessionApi> SessionOrchestrator<A> {
    pub fn new(api: Arc<A>, identity: IdentitySource) -> Self {
        let (state_tx, _) = watch::channel(SessionSnapshot::default());
        Self {
            api,
            identity,
            dev_fallback: false,
            abort: AbortSignal::new(),
            state_tx,
            cycle_lock: Mutex::new(()),
            started_cycles: AtomicU64::new(0),
            completed_cycles: AtomicU64::new(0),
            bootstrapped: OnceCell::new(),
        }
    }

    /// Build from configuration, taking the identity payload from the host
    pub fn from_config(api: Arc<A>, config: &Config, host: &dyn HostEnvironment) -> Self {
        let identity = IdentitySource::resolve(
            config.app.mode,
            config.app.dev_init_data.as_deref(),
            host,
        );
        Self::new(api, identity).with_dev_fallback(config.dev_fallback_enabled())
    }

    pub fn with_dev_fallback(mut self, enabled: bool) -> Self {
        self.dev_fallback = enabled;
        self
    }

    pub fn with_abort_signal(mut self, abort: AbortSignal) -> Self {
        self.abort = abort;
        self
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn identity(&self) -> &IdentitySource {
        &self.identity
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state_tx.subscribe()
    }

    pub fn abort_signal(&self) -> AbortSignal {
        self.abort.clone()
    }

    /// Cancel any in-flight cycle; nothing is published afterwards
    pub fn abort(&self) {
        self.abort.abort();
    }

    /// The signed-in user, or why there is none
    #[track_caller]
    pub fn current_user(&self) -> SessionErrorResult<User> {
        if self.abort.is_aborted() {
            return Err(SessionError::aborted());
        }
        let snapshot = self.snapshot();
        match snapshot.user {
            Some(user) => Ok(user),
            None => Err(SessionError::unauthenticated(
                snapshot
                    .error
                    .unwrap_or_else(|| "no active session".to_string()),
            )),
        }
    }

    /// Run the first cycle. Later calls wait for it and return the current state.
    pub async fn bootstrap(&self) -> SessionSnapshot {
        self.bootstrapped
            .get_or_init(|| async {
                log::info!(
                    "Bootstrapping session (identity source: {})",
                    self.identity.describe()
                );
                self.run_exclusive(Join::InFlight).await;
            })
            .await;
        self.snapshot()
    }

    /// Re-run the ladder from the probe.
    /// A caller that finds a cycle in flight shares its result.
    pub async fn refresh(&self) -> SessionSnapshot {
        self.run_exclusive(Join::InFlight).await
    }

    /// Re-fetch the user after a write. Only a cycle that started after this
    /// call can be shared, so the probe always observes the write.
    pub async fn refetch(&self) -> SessionSnapshot {
        self.run_exclusive(Join::StartedAfter).await
    }

    async fn run_exclusive(&self, join: Join) -> SessionSnapshot {
        let started = self.started_cycles.load(Ordering::Acquire);
        let completed = self.completed_cycles.load(Ordering::Acquire);
        let _cycle = self.cycle_lock.lock().await;

        let joinable = match join {
            Join::InFlight => self.completed_cycles.load(Ordering::Acquire) != completed,
            Join::StartedAfter => self.started_cycles.load(Ordering::Acquire) != started,
        };
        if joinable {
            log::debug!("Joined a session cycle that was already in flight");
            return self.snapshot();
        }

        self.started_cycles.fetch_add(1, Ordering::Release);
        let snapshot = self.run_cycle().await;
        self.completed_cycles.fetch_add(1, Ordering::Release);
        snapshot
    }

    async fn run_cycle(&self) -> SessionSnapshot {
        let mut refreshed = false;
        let mut exchanged = false;
        let mut unreachable = false;
        let mut last_error: Option<String> = None;

        loop {
            self.enter(SessionPhase::Probing);
            let Some(probe) = self.abort.run(self.api.whoami()).await else {
                return self.aborted();
            };

            let wants_refresh = match probe {
                Ok(ProbeOutcome::Authenticated(user)) => {
                    return self.settle_authenticated(*user, None);
                }
                Ok(ProbeOutcome::Unauthorized) => {
                    last_error = Some("Session is not authorized".to_string());
                    true
                }
                Ok(ProbeOutcome::Rejected(message)) => {
                    log::warn!("Server answered without a user: {message}");
                    last_error = Some(message);
                    false
                }
                Err(e) => {
                    log::warn!("Session probe failed: {e}");
                    // An undecodable body usually comes from a proxy, not the API
                    let no_answer = e.is_transport() || e.is_decode();
                    unreachable |= no_answer;
                    last_error = Some(e.user_message());
                    no_answer || e.is_auth_failure()
                }
            };

            if wants_refresh && !refreshed {
                refreshed = true;
                self.enter(SessionPhase::Refreshing);
                match self.abort.run(self.api.refresh()).await {
                    None => return self.aborted(),
                    Some(Ok(())) => {
                        log::debug!("Session refreshed, probing again");
                        continue;
                    }
                    Some(Err(e)) => {
                        log::warn!("Session refresh failed: {e}");
                        unreachable |= e.is_transport();
                        last_error = Some(e.user_message());
                    }
                }
            }

            if exchanged {
                return self.settle_unauthenticated(last_error, unreachable);
            }
            exchanged = true;

            let Some(payload) = self.identity.payload() else {
                log::info!("No identity payload available, staying signed out");
                return self.settle_unauthenticated(last_error, unreachable);
            };

            self.enter(SessionPhase::Exchanging);
            match self.abort.run(self.api.exchange(payload)).await {
                None => return self.aborted(),
                Some(Ok(())) => {
                    log::debug!("Identity exchanged, probing again");
                }
                Some(Err(e)) => {
                    log::warn!("Identity exchange failed: {e}");
                    unreachable |= e.is_transport();
                    last_error = Some(e.user_message());
                    return self.settle_unauthenticated(last_error, unreachable);
                }
            }
        }
    }

    fn enter(&self, phase: SessionPhase) {
        if self.abort.is_aborted() {
            return;
        }
        self.state_tx.send_modify(|snapshot| {
            snapshot.phase = phase;
            snapshot.loading = true;
        });
    }

    fn settle_authenticated(&self, user: User, error: Option<String>) -> SessionSnapshot {
        log::info!("Session authenticated as user {}", user.id);
        self.publish(SessionSnapshot {
            phase: SessionPhase::Authenticated,
            user: Some(user),
            loading: false,
            error,
        })
    }

    fn settle_unauthenticated(&self, error: Option<String>, unreachable: bool) -> SessionSnapshot {
        if self.dev_fallback && unreachable {
            log::warn!("API unreachable, continuing with the development placeholder user");
            return self.settle_authenticated(placeholder_user(), error);
        }

        log::info!("Session unauthenticated");
        self.publish(SessionSnapshot {
            phase: SessionPhase::Unauthenticated,
            user: None,
            loading: false,
            error,
        })
    }

    fn aborted(&self) -> SessionSnapshot {
        log::debug!("Session cycle aborted");
        self.snapshot()
    }

    fn publish(&self, snapshot: SessionSnapshot) -> SessionSnapshot {
        if self.abort.is_aborted() {
            return self.snapshot();
        }
        self.state_tx.send_replace(snapshot.clone());
        snapshot
    }
}
