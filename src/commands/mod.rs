//! Command handlers
//!
//! Each handler resolves configuration and the project root, runs one use
//! case, and prints either human-readable lines or JSON.

pub mod catalog;
pub mod publish;
pub mod rollback;
pub mod versions;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use shotpub::domain::ports::{NotificationSink, SceneEngine};
use shotpub::{Config, ConsoleNotificationSink, JsonNotificationSink, LocalFs, Session};

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub project: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Project root and effective configuration.
///
/// Root precedence: `--project`, then `project.root` (config file or
/// `SHOTPUB_PROJECT_ROOT`), then the current directory.
pub fn resolve_project(global: &GlobalArgs) -> Result<(PathBuf, Config)> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let lookup_root = global.project.clone().unwrap_or_else(|| cwd.clone());

    let (config, warnings) = shotpub::config::resolve(global.config.as_deref(), Some(&lookup_root))?;
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    let root = global
        .project
        .clone()
        .or_else(|| config.project.root.clone())
        .unwrap_or(cwd);
    Ok((root, config))
}

pub fn notification_sink(json: bool) -> Arc<dyn NotificationSink> {
    if json {
        Arc::new(JsonNotificationSink::stdout())
    } else {
        Arc::new(ConsoleNotificationSink::stdout())
    }
}

pub fn open_session<E: SceneEngine>(
    global: &GlobalArgs,
    engine: E,
) -> Result<Session<LocalFs, E>> {
    let (root, config) = resolve_project(global)?;
    let session = Session::open(&root, LocalFs::new(), engine, notification_sink(global.json), config)
        .with_context(|| format!("cannot open project {}", root.display()))?;
    Ok(session)
}

pub fn print_json(value: &serde_json::Value) {
    println!("{}", value);
}

/// File name of `path` for display
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
