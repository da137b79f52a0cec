use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::Deserialize;

/// Top-level configuration for easel.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Canvas pane placement settings.
    #[serde(default)]
    pub pane: PaneConfig,

    /// Override for the directory where pane handles are persisted
    /// (default: $XDG_STATE_HOME/easel).
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

/// Canvas pane placement configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PaneConfig {
    /// Width of the canvas pane as a percentage of the window,
    /// tmux only (default: 67).
    #[serde(default = "default_split_percent")]
    #[schemars(default = "default_split_percent")]
    pub split_percent: u8,

    /// Milliseconds to wait between interrupting the pane's process and
    /// sending the new command (default: 150).
    #[serde(default = "default_settle_delay_ms")]
    #[schemars(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Hours a zellij pane marker stays valid for reuse (default: 24).
    #[serde(default = "default_freshness_hours")]
    #[schemars(default = "default_freshness_hours")]
    pub freshness_hours: u64,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            split_percent: default_split_percent(),
            settle_delay_ms: default_settle_delay_ms(),
            freshness_hours: default_freshness_hours(),
        }
    }
}

impl PaneConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn freshness_window(&self) -> Duration {
        Duration::from_secs(self.freshness_hours.saturating_mul(60 * 60))
    }
}

fn default_split_percent() -> u8 {
    67
}

fn default_settle_delay_ms() -> u64 {
    150
}

fn default_freshness_hours() -> u64 {
    24
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from ~/.config/easel/config.ya?ml.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = crate::shared::dirs::config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir.join("easel"))
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
/// Returns Config::default() if neither file exists.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

/// Parse YAML content into Config.
fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
