//! Reuse-or-create decision logic for the canvas pane.
//!
//! Each invocation is an independent process: the only state carried
//! between runs is the handle in the pane registry. The algorithm always
//! tries to reuse a recorded pane before splitting a new one, so the user
//! sees at most one canvas pane even across many invocations. A stale
//! handle (pane closed, backend hiccup) is cleared and silently replaced
//! by a fresh split; only "no multiplexer" and "creation failed" reach the
//! caller as errors.

use thiserror::Error;
use tracing::debug;

use crate::infra::multiplexer::{self, Backend, MultiplexerError, MultiplexerKind};
use crate::infra::registry::PaneRegistry;
use crate::shared::config::Config;

#[derive(Error, Debug)]
pub enum PlaceError {
    #[error("no terminal multiplexer detected; run inside a tmux or zellij session")]
    NoMultiplexer,

    #[error("failed to create canvas pane: {0}")]
    CreateFailed(#[from] MultiplexerError),
}

pub type Result<T> = std::result::Result<T, PlaceError>;

/// Outcome of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: MultiplexerKind,
    pub created_new: bool,
}

/// Detect the active multiplexer and place `command` in the canvas pane.
pub fn place(command: &str, registry: &dyn PaneRegistry, config: &Config) -> Result<Placement> {
    let kind = multiplexer::detect().ok_or(PlaceError::NoMultiplexer)?;
    let backend = multiplexer::backend_for(kind, &config.pane);
    ensure_pane(backend.as_ref(), registry, command)
}

/// Run `command` in the canvas pane, reusing the recorded pane when
/// possible and splitting a new one otherwise.
pub fn ensure_pane(
    backend: &dyn Backend,
    registry: &dyn PaneRegistry,
    command: &str,
) -> Result<Placement> {
    let kind = backend.kind();

    if let Some(handle) = registry.read(kind) {
        if backend.verify_exists(&handle) {
            match backend.reuse(&handle, command) {
                Ok(()) => {
                    debug!(%kind, handle, "reused existing canvas pane");
                    return Ok(Placement {
                        kind,
                        created_new: false,
                    });
                }
                Err(e) => {
                    // Pane closed by the user and a transient backend error
                    // are indistinguishable here; both fall through to a
                    // fresh split.
                    debug!(%kind, handle, error = %e, "reuse failed, recreating pane");
                }
            }
        } else {
            debug!(%kind, handle, "recorded pane no longer exists");
        }
        registry.clear(kind);
    }

    let handle = backend.create_split_pane(command)?;
    registry.write(kind, &handle);
    debug!(%kind, handle, "created new canvas pane");

    Ok(Placement {
        kind,
        created_new: true,
    })
}
