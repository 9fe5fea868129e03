use crate::HostEnvironment;

use td_core::{ColorScheme, ThemeMode};
use tokio::sync::watch;

/// Resolves the member's theme choice against the host's color scheme
pub struct ThemeController {
    mode: ThemeMode,
    host_rx: watch::Receiver<Option<ColorScheme>>,
    resolved_tx: watch::Sender<ColorScheme>,
}

impl ThemeController {
    pub fn new(host: &dyn HostEnvironment, mode: ThemeMode) -> Self {
        let host_rx = host.subscribe_theme();
        let resolved = mode.resolve(*host_rx.borrow());
        let (resolved_tx, _) = watch::channel(resolved);
        Self {
            mode,
            host_rx,
            resolved_tx,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The scheme to render with right now
    pub fn resolved(&self) -> ColorScheme {
        *self.resolved_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ColorScheme> {
        self.resolved_tx.subscribe()
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> ColorScheme {
        self.mode = mode;
        self.republish()
    }

    /// Advance system → dark → light → system
    pub fn toggle(&mut self) -> ThemeMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Wait for the next host `themeChanged` and re-resolve.
    /// Returns `None` once the host is gone.
    pub async fn follow_host(&mut self) -> Option<ColorScheme> {
        self.host_rx.changed().await.ok()?;
        Some(self.republish())
    }

    fn republish(&mut self) -> ColorScheme {
        let host_scheme = *self.host_rx.borrow_and_update();
        let resolved = self.mode.resolve(host_scheme);
        self.resolved_tx.send_if_modified(|current| {
            let changed = *current != resolved;
            *current = resolved;
            changed
        });
        log::debug!("Theme {} resolved to {resolved}", self.mode);
        resolved
    }
}
