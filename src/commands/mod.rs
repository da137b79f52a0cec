pub mod clear;
pub mod config;
pub mod open;
pub mod status;

use std::path::PathBuf;

use crate::infra::registry::FsPaneRegistry;
use crate::shared::config::Config;

/// Build the pane registry: config override, then the XDG state dir,
/// then /tmp as a last resort (no HOME set).
fn registry_for(config: &Config) -> FsPaneRegistry {
    let dir = config
        .state_dir
        .clone()
        .or_else(FsPaneRegistry::default_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp/easel"));
    FsPaneRegistry::new(dir)
}
