use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

/// Cancels in-flight session work at its next await point.
///
/// Once raised the signal stays raised; clones share the same flag.
#[derive(Clone)]
pub struct AbortSignal {
    abort_tx: Arc<watch::Sender<bool>>,
}

impl AbortSignal {
    pub fn new() -> Self {
        let (abort_tx, _) = watch::channel(false);
        Self {
            abort_tx: Arc::new(abort_tx),
        }
    }

    /// Raise the signal
    pub fn abort(&self) {
        log::info!("Abort requested, cancelling session work");
        self.abort_tx.send_replace(true);
    }

    pub fn is_aborted(&self) -> bool {
        *self.abort_tx.borrow()
    }

    /// Resolve once the signal is raised
    pub async fn cancelled(&self) {
        let mut abort_rx = self.abort_tx.subscribe();
        let _ = abort_rx.wait_for(|aborted| *aborted).await;
    }

    /// Run `work` unless the signal is raised first
    pub async fn run<F: Future>(&self, work: F) -> Option<F::Output> {
        if self.is_aborted() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            output = work => Some(output),
        }
    }
}

impl Default for AbortSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AbortSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbortSignal")
            .field("aborted", &self.is_aborted())
            .finish()
    }
}
