//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::ports::CommitOptions;
use crate::error::{ShotpubError, ShotpubResult};

use super::loader::{self, ConfigWarning};

/// Project selection
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project root used when `--project` is not given
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Update polling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl WatchConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_interval_ms() -> u64 {
    10_000
}

/// Parameters forwarded to the scene engine on commit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default = "default_frame_start")]
    pub frame_start: i32,
    #[serde(default = "default_frame_end")]
    pub frame_end: i32,
    #[serde(default = "default_alembic_data_format")]
    pub alembic_data_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            frame_start: default_frame_start(),
            frame_end: default_frame_end(),
            alembic_data_format: default_alembic_data_format(),
        }
    }
}

impl ExportConfig {
    /// Commit options for a publish over `roots`
    pub fn commit_options(&self, roots: &[String]) -> CommitOptions {
        CommitOptions {
            roots: roots.to_vec(),
            frame_range: (self.frame_start, self.frame_end),
            alembic_data_format: self.alembic_data_format.clone(),
        }
    }
}

fn default_frame_start() -> i32 {
    1
}

fn default_frame_end() -> i32 {
    120
}

fn default_alembic_data_format() -> String {
    "ogawa".to_string()
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> ShotpubResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Reject values that parse but cannot work
    pub fn validate(&self, file: &Path) -> ShotpubResult<()> {
        if self.watch.interval_ms == 0 {
            return Err(ShotpubError::Config {
                file: file.to_path_buf(),
                message: "watch.interval_ms must be greater than 0".to_string(),
            });
        }
        if self.export.frame_start > self.export.frame_end {
            return Err(ShotpubError::Config {
                file: file.to_path_buf(),
                message: format!(
                    "export.frame_start ({}) is after export.frame_end ({})",
                    self.export.frame_start, self.export.frame_end
                ),
            });
        }
        Ok(())
    }
}
