//! Durable record of the last canvas pane handle, one file per backend.
//!
//! Persistence is best-effort: losing a handle only costs a future reuse
//! opportunity, so every I/O failure degrades to "no handle on record"
//! instead of aborting the orchestration attempt. The files carry no lock;
//! concurrent invocations race with last-writer-wins, which is acceptable
//! for a single-user interactive convenience.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::infra::multiplexer::MultiplexerKind;
use crate::shared::dirs;

/// Read/write/clear access to the persisted pane handle per backend.
pub trait PaneRegistry {
    /// The stored handle, or None when absent, cleared, or unreadable.
    fn read(&self, kind: MultiplexerKind) -> Option<String>;

    /// Persist a handle, overwriting any previous one. Failures are
    /// swallowed.
    fn write(&self, kind: MultiplexerKind, handle: &str);

    /// Mark the stored handle as stale by emptying the entry.
    fn clear(&self, kind: MultiplexerKind);
}

/// File-backed registry rooted at a directory.
pub struct FsPaneRegistry {
    dir: PathBuf,
}

impl FsPaneRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default registry location: `$XDG_STATE_HOME/easel` or
    /// `~/.local/state/easel`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::state_dir().map(|d| d.join("easel"))
    }

    pub fn entry_path(&self, kind: MultiplexerKind) -> PathBuf {
        self.dir.join(format!("{}-pane", kind.as_str()))
    }

    fn write_entry(&self, path: &Path, content: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "failed to create registry directory");
            return;
        }
        if let Err(e) = std::fs::write(path, content) {
            warn!(path = %path.display(), error = %e, "failed to write pane registry entry");
        }
    }
}

impl PaneRegistry for FsPaneRegistry {
    fn read(&self, kind: MultiplexerKind) -> Option<String> {
        let content = std::fs::read_to_string(self.entry_path(kind)).ok()?;
        let handle = content.trim();
        if handle.is_empty() {
            None
        } else {
            Some(handle.to_string())
        }
    }

    fn write(&self, kind: MultiplexerKind, handle: &str) {
        self.write_entry(&self.entry_path(kind), handle);
    }

    fn clear(&self, kind: MultiplexerKind) {
        self.write_entry(&self.entry_path(kind), "");
    }
}
