//! Configuration module for shotpub
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHOTPUB_*)
//! 3. Explicit `--config` file, else project config (`{root}/shotpub.toml`)
//! 4. User config (`~/.config/shotpub/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_with_warnings, resolve, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, ExportConfig, ProjectConfig, WatchConfig};
