//! tmux adapter: the query-capable backend.
//!
//! tmux assigns every pane a stable id (`%3`) and can be asked about it
//! later, so stale handles are detected by an actual query instead of a
//! heuristic.

use std::time::Duration;

use tracing::debug;

use super::error::{MultiplexerError, Result};
use super::runner::ControlRunner;
use super::{Backend, MultiplexerKind};

/// Width given to the canvas pane, as a percentage of the window.
const DEFAULT_SPLIT_PERCENT: u8 = 67;

/// Pause between interrupting the pane's process and sending the new
/// command. A debounce, not a termination confirmation: an interrupted
/// process slower than this still races the new command.
const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(150);

pub struct TmuxBackend<R> {
    runner: R,
    split_percent: u8,
    settle_delay: Duration,
}

impl<R: ControlRunner> TmuxBackend<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            split_percent: DEFAULT_SPLIT_PERCENT,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    #[must_use]
    pub fn with_split_percent(mut self, percent: u8) -> Self {
        self.split_percent = percent;
        self
    }

    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

impl<R: ControlRunner> Backend for TmuxBackend<R> {
    fn kind(&self) -> MultiplexerKind {
        MultiplexerKind::Tmux
    }

    /// Ask tmux to resolve the handle back to a pane id.
    ///
    /// The pane counts as alive only when the query succeeds AND echoes the
    /// exact same id; tmux reuses ids after panes close, so a bare success
    /// is not enough.
    fn verify_exists(&self, handle: &str) -> bool {
        match self
            .runner
            .run(&["display-message", "-t", handle, "-p", "#{pane_id}"])
        {
            Ok(output) => output == handle,
            Err(e) => {
                debug!(handle, error = %e, "pane query failed, treating handle as stale");
                false
            }
        }
    }

    fn create_split_pane(&self, command: &str) -> Result<String> {
        let percent = self.split_percent.to_string();
        // -P -F prints the new pane id so it can be persisted for reuse.
        let pane_id = self.runner.run(&[
            "split-window",
            "-h",
            "-p",
            &percent,
            "-P",
            "-F",
            "#{pane_id}",
            command,
        ])?;

        if pane_id.is_empty() {
            return Err(MultiplexerError::NoPaneId {
                command: "tmux".to_string(),
            });
        }

        Ok(pane_id)
    }

    fn reuse(&self, handle: &str, command: &str) -> Result<()> {
        // Interrupt whatever is running in the pane.
        self.runner.run(&["send-keys", "-t", handle, "C-c"])?;

        // Give the interrupted process time to release the terminal.
        std::thread::sleep(self.settle_delay);

        let clear_and_run = format!("clear && {command}");
        self.runner
            .run(&["send-keys", "-t", handle, &clear_and_run, "Enter"])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::multiplexer::testing::{ScriptedRunner, failure};

    fn backend(runner: ScriptedRunner) -> TmuxBackend<ScriptedRunner> {
        TmuxBackend::new(runner).with_settle_delay(Duration::ZERO)
    }

    #[test]
    fn verify_exists_requires_exact_id_match() {
        let runner = ScriptedRunner::new(vec![Ok("%3".to_string())]);
        let tmux = backend(runner);
        assert!(tmux.verify_exists("%3"));
    }

    #[test]
    fn verify_exists_rejects_aliased_id() {
        // tmux resolved the target, but to a different pane.
        let runner = ScriptedRunner::new(vec![Ok("%7".to_string())]);
        let tmux = backend(runner);
        assert!(!tmux.verify_exists("%3"));
    }

    #[test]
    fn verify_exists_is_false_on_query_failure() {
        let runner = ScriptedRunner::new(vec![failure()]);
        let tmux = backend(runner);
        assert!(!tmux.verify_exists("%3"));
    }

    #[test]
    fn create_split_pane_returns_reported_id() {
        let runner = ScriptedRunner::new(vec![Ok("%3".to_string())]);
        let tmux = backend(runner);

        let handle = tmux.create_split_pane("echo hi").unwrap();
        assert_eq!(handle, "%3");

        let calls = tmux.runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![
                "split-window",
                "-h",
                "-p",
                "67",
                "-P",
                "-F",
                "#{pane_id}",
                "echo hi"
            ]
        );
    }

    #[test]
    fn create_split_pane_honors_split_percent() {
        let runner = ScriptedRunner::new(vec![Ok("%3".to_string())]);
        let tmux = backend(runner).with_split_percent(50);

        tmux.create_split_pane("echo hi").unwrap();
        assert_eq!(tmux.runner.calls()[0][3], "50");
    }

    #[test]
    fn create_split_pane_fails_without_pane_id() {
        let runner = ScriptedRunner::new(vec![Ok(String::new())]);
        let tmux = backend(runner);

        let err = tmux.create_split_pane("echo hi").unwrap_err();
        assert!(matches!(err, MultiplexerError::NoPaneId { .. }));
    }

    #[test]
    fn create_split_pane_propagates_command_failure() {
        let runner = ScriptedRunner::new(vec![failure()]);
        let tmux = backend(runner);
        assert!(tmux.create_split_pane("echo hi").is_err());
    }

    #[test]
    fn reuse_interrupts_then_clears_and_runs() {
        let runner = ScriptedRunner::new(vec![Ok(String::new()), Ok(String::new())]);
        let tmux = backend(runner);

        tmux.reuse("%3", "echo hi").unwrap();

        let calls = tmux.runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], vec!["send-keys", "-t", "%3", "C-c"]);
        assert_eq!(
            calls[1],
            vec!["send-keys", "-t", "%3", "clear && echo hi", "Enter"]
        );
    }

    #[test]
    fn reuse_fails_if_interrupt_fails() {
        let runner = ScriptedRunner::new(vec![failure()]);
        let tmux = backend(runner);

        assert!(tmux.reuse("%3", "echo hi").is_err());
        // The run step must not be attempted after a failed interrupt.
        assert_eq!(tmux.runner.calls().len(), 1);
    }

    #[test]
    fn reuse_fails_if_run_step_fails() {
        let runner = ScriptedRunner::new(vec![Ok(String::new()), failure()]);
        let tmux = backend(runner);
        assert!(tmux.reuse("%3", "echo hi").is_err());
    }
}
