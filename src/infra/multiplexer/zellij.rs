//! zellij adapter: the heuristic backend.
//!
//! zellij has no primitive for querying a pane, so the persisted handle is
//! just the creation timestamp in milliseconds. "Verification" is a
//! freshness check on that timestamp: false positives (the user closed the
//! pane) are expected and recovered by the reuse-failure fallback, and a
//! handle older than the window reports dead even when the pane genuinely
//! survives. That asymmetry is deliberate.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;

use super::error::Result;
use super::runner::ControlRunner;
use super::{Backend, MultiplexerKind};

/// How long a stored creation timestamp counts as "pane probably alive".
const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Same interrupt-to-command debounce as the tmux adapter.
const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(150);

pub struct ZellijBackend<R> {
    runner: R,
    settle_delay: Duration,
    freshness_window: Duration,
}

impl<R: ControlRunner> ZellijBackend<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            settle_delay: DEFAULT_SETTLE_DELAY,
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
        }
    }

    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    #[must_use]
    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.freshness_window = window;
        self
    }

    /// Move focus back to the original pane. Creation and reuse already
    /// logically succeeded by the time this runs, so a failure here only
    /// leaves focus on the canvas pane.
    fn restore_focus(&self) {
        if let Err(e) = self.runner.run(&["action", "move-focus", "left"]) {
            debug!(error = %e, "failed to return focus to the original pane");
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl<R: ControlRunner> Backend for ZellijBackend<R> {
    fn kind(&self) -> MultiplexerKind {
        MultiplexerKind::Zellij
    }

    fn verify_exists(&self, handle: &str) -> bool {
        let Ok(created_ms) = handle.trim().parse::<u64>() else {
            return false;
        };
        let age = Duration::from_millis(now_ms().saturating_sub(created_ms));
        age < self.freshness_window
    }

    fn create_split_pane(&self, command: &str) -> Result<String> {
        self.runner.run(&[
            "action", "new-pane", "--direction", "right", "--", "sh", "-c", command,
        ])?;

        // new-pane steals focus; hand it back to the caller's pane.
        self.restore_focus();

        Ok(now_ms().to_string())
    }

    fn reuse(&self, _handle: &str, command: &str) -> Result<()> {
        // Focus must land on the canvas pane first; everything below is
        // keystroke injection into whichever pane has focus.
        self.runner.run(&["action", "move-focus", "right"])?;

        // Byte 3 = Ctrl+C.
        self.runner.run(&["action", "write", "3"])?;

        std::thread::sleep(self.settle_delay);

        let clear_and_run = format!("clear && {command}");
        self.runner
            .run(&["action", "write-chars", &clear_and_run])?;

        // write-chars does not submit; byte 13 = Enter.
        self.runner.run(&["action", "write", "13"])?;

        self.restore_focus();

        Ok(())
    }
}
