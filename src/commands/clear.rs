use clap::Args;

use super::registry_for;
use crate::infra::multiplexer::{self, MultiplexerKind};
use crate::infra::registry::PaneRegistry;
use crate::orchestrator::PlaceError;
use crate::shared::config;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ClearArgs {
    /// Forget handles for every backend, not just the detected one
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: &ClearArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;
    let registry = registry_for(&config);

    for kind in kinds_to_clear(args.all, multiplexer::detect())? {
        registry.clear(kind);
        println!("cleared {kind} pane handle");
    }

    Ok(())
}

/// Which backends to clear: all of them with --all, otherwise only the
/// detected one. Clearing is idempotent, so no check whether anything was
/// actually stored.
fn kinds_to_clear(
    all: bool,
    detected: Option<MultiplexerKind>,
) -> Result<Vec<MultiplexerKind>, PlaceError> {
    if all {
        return Ok(MultiplexerKind::ALL.to_vec());
    }
    detected
        .map(|kind| vec![kind])
        .ok_or(PlaceError::NoMultiplexer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_flag_clears_every_backend() {
        let kinds = kinds_to_clear(true, None).unwrap();
        assert_eq!(kinds, vec![MultiplexerKind::Tmux, MultiplexerKind::Zellij]);
    }

    #[test]
    fn without_all_clears_only_detected_backend() {
        let kinds = kinds_to_clear(false, Some(MultiplexerKind::Zellij)).unwrap();
        assert_eq!(kinds, vec![MultiplexerKind::Zellij]);
    }

    #[test]
    fn without_all_fails_when_nothing_detected() {
        let err = kinds_to_clear(false, None).unwrap_err();
        assert!(matches!(err, PlaceError::NoMultiplexer));
    }
}
