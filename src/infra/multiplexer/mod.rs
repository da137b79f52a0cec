//! Multiplexer detection and backend adapters for the canvas pane.

pub mod error;
mod runner;
#[cfg(test)]
pub(crate) mod testing;
mod tmux;
mod zellij;

pub use error::{MultiplexerError, Result};
pub use runner::{ControlRunner, ProcessRunner};
pub use tmux::TmuxBackend;
pub use zellij::ZellijBackend;

use serde::Serialize;

use crate::shared::config::PaneConfig;

/// Which terminal multiplexer the current process is running inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiplexerKind {
    Tmux,
    Zellij,
}

impl MultiplexerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::Zellij => "zellij",
        }
    }

    pub const ALL: [MultiplexerKind; 2] = [MultiplexerKind::Tmux, MultiplexerKind::Zellij];
}

impl std::fmt::Display for MultiplexerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the active multiplexer from the process environment.
///
/// tmux takes precedence over zellij when both variables are present
/// (nested sessions resolve toward tmux). The ordering is part of the
/// contract and must stay stable.
pub fn detect() -> Option<MultiplexerKind> {
    if non_empty_env("TMUX") {
        return Some(MultiplexerKind::Tmux);
    }
    if non_empty_env("ZELLIJ") || non_empty_env("ZELLIJ_SESSION_NAME") {
        return Some(MultiplexerKind::Zellij);
    }
    None
}

fn non_empty_env(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| !v.is_empty())
}

/// Capability surface of one multiplexer backend.
///
/// tmux can query a pane by id; zellij cannot, so its `verify_exists` is a
/// freshness heuristic over the stored creation timestamp. Callers must
/// treat a `true` from `verify_exists` as "worth attempting reuse", not as
/// proof the pane is alive.
pub trait Backend {
    fn kind(&self) -> MultiplexerKind;

    /// Best-effort check that the stored handle still refers to a live pane.
    fn verify_exists(&self, handle: &str) -> bool;

    /// Split off a new canvas pane running `command`; returns the handle to
    /// persist for later reuse.
    fn create_split_pane(&self, command: &str) -> Result<String>;

    /// Interrupt whatever runs in the pane and feed it `command`.
    fn reuse(&self, handle: &str, command: &str) -> Result<()>;
}

/// Build the adapter matching a detected multiplexer.
pub fn backend_for(kind: MultiplexerKind, config: &PaneConfig) -> Box<dyn Backend> {
    match kind {
        MultiplexerKind::Tmux => Box::new(
            TmuxBackend::new(ProcessRunner::new("tmux"))
                .with_split_percent(config.split_percent)
                .with_settle_delay(config.settle_delay()),
        ),
        MultiplexerKind::Zellij => Box::new(
            ZellijBackend::new(ProcessRunner::new("zellij"))
                .with_settle_delay(config.settle_delay())
                .with_freshness_window(config.freshness_window()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::tmux_only(Some("/tmp/tmux-1000/default,123,0"), None, None, Some(MultiplexerKind::Tmux))]
    #[case::zellij_only(None, Some("0"), None, Some(MultiplexerKind::Zellij))]
    #[case::zellij_session_name_only(None, None, Some("main"), Some(MultiplexerKind::Zellij))]
    #[case::tmux_wins_over_zellij(
        Some("/tmp/tmux-1000/default,123,0"),
        Some("0"),
        Some("main"),
        Some(MultiplexerKind::Tmux)
    )]
    #[case::nothing_set(None, None, None, None)]
    #[case::empty_values_treated_as_unset(Some(""), Some(""), Some(""), None)]
    fn detect_classifies_environment(
        #[case] tmux: Option<&str>,
        #[case] zellij: Option<&str>,
        #[case] zellij_session: Option<&str>,
        #[case] expected: Option<MultiplexerKind>,
    ) {
        temp_env::with_vars(
            [
                ("TMUX", tmux),
                ("ZELLIJ", zellij),
                ("ZELLIJ_SESSION_NAME", zellij_session),
            ],
            || {
                assert_eq!(detect(), expected);
            },
        );
    }

    #[test]
    fn kind_as_str_matches_binary_names() {
        assert_eq!(MultiplexerKind::Tmux.as_str(), "tmux");
        assert_eq!(MultiplexerKind::Zellij.as_str(), "zellij");
    }
}
