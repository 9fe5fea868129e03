mod host;

use crate::{IdentitySource, SessionApi, placeholder_user};

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use td_client::{ClientError, ClientResult, ProbeOutcome};
use td_core::{IdentityPayload, User};

/// `SessionApi` that replays queued answers and counts calls.
/// An exhausted queue answers as a signed-out server would.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    probes: Mutex<VecDeque<ClientResult<ProbeOutcome>>>,
    refreshes: Mutex<VecDeque<ClientResult<()>>>,
    exchanges: Mutex<VecDeque<ClientResult<()>>>,
    probe_delay: Option<Duration>,
    hang_probes: bool,
    probe_calls: AtomicUsize,
    refresh_calls: AtomicUsize,
    exchange_calls: AtomicUsize,
}

impl ScriptedApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn probe(self, answer: ClientResult<ProbeOutcome>) -> Self {
        self.probes.lock().unwrap().push_back(answer);
        self
    }

    pub(crate) fn refresh(self, answer: ClientResult<()>) -> Self {
        self.refreshes.lock().unwrap().push_back(answer);
        self
    }

    pub(crate) fn exchange(self, answer: ClientResult<()>) -> Self {
        self.exchanges.lock().unwrap().push_back(answer);
        self
    }

    pub(crate) fn with_probe_delay(mut self, delay: Duration) -> Self {
        self.probe_delay = Some(delay);
        self
    }

    pub(crate) fn hanging(mut self) -> Self {
        self.hang_probes = true;
        self
    }

    pub(crate) fn probe_calls(&self) -> usize {
        self.probe_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn exchange_calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionApi for ScriptedApi {
    async fn whoami(&self) -> ClientResult<ProbeOutcome> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        if self.hang_probes {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.probe_delay {
            tokio::time::sleep(delay).await;
        }
        let answer = self.probes.lock().unwrap().pop_front();
        answer.unwrap_or(Ok(ProbeOutcome::Unauthorized))
    }

    async fn refresh(&self) -> ClientResult<()> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        let answer = self.refreshes.lock().unwrap().pop_front();
        answer.unwrap_or_else(|| Err(ClientError::unauthorized()))
    }

    async fn exchange(&self, _payload: &IdentityPayload) -> ClientResult<()> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        let answer = self.exchanges.lock().unwrap().pop_front();
        answer.unwrap_or_else(|| Err(ClientError::rejected("exchange refused")))
    }
}

pub(crate) fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        is_new: false,
        ..placeholder_user()
    }
}

pub(crate) fn authenticated(id: &str) -> ClientResult<ProbeOutcome> {
    Ok(ProbeOutcome::Authenticated(Box::new(user(id))))
}

pub(crate) fn host_payload() -> IdentitySource {
    IdentitySource::Host(IdentityPayload::new("query_id=q1&hash=abc").unwrap())
}

/// Payload whose embedded user speaks the given language
pub(crate) fn payload_with_language(code: &str) -> IdentityPayload {
    IdentityPayload::new(format!(
        "user=%7B%22id%22%3A1%2C%22first_name%22%3A%22Anna%22%2C%22language_code%22%3A%22{code}%22%7D&hash=abc"
    ))
    .unwrap()
}
