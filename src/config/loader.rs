//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ShotpubError, ShotpubResult};

use super::types::Config;

/// Config file name looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "shotpub.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShotpubResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ShotpubError::io(path, e))?;

    let mut unknown: Vec<String> = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |p| unknown.push(p.to_string()))
            .map_err(|e| ShotpubError::Config {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
    config.validate(path)?;

    let warnings = unknown
        .iter()
        .map(|dotted| {
            let (section, key) = match dotted.rsplit_once('.') {
                Some((section, key)) => (Some(section), key),
                None => (None, dotted.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: line_of_key(&content, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit file must exist and parse. Project and user files are used
/// when present. Environment overrides are applied last.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> ShotpubResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => project_root
            .map(|root| root.join(PROJECT_CONFIG_FILE))
            .filter(|p| p.is_file())
            .or_else(|| {
                dirs::config_dir()
                    .map(|d| d.join("shotpub").join("config.toml"))
                    .filter(|p| p.is_file())
            }),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config)?, warnings))
}

/// Apply environment variable overrides (SHOTPUB_* prefix)
pub fn with_env_overrides(mut config: Config) -> ShotpubResult<Config> {
    let env_source = PathBuf::from("<environment>");

    // SHOTPUB_PROJECT_ROOT
    if let Ok(root) = std::env::var("SHOTPUB_PROJECT_ROOT") {
        if !root.trim().is_empty() {
            config.project.root = Some(PathBuf::from(root));
        }
    }

    // SHOTPUB_WATCH_INTERVAL_MS
    if let Ok(interval) = std::env::var("SHOTPUB_WATCH_INTERVAL_MS") {
        config.watch.interval_ms = interval.trim().parse().map_err(|_| ShotpubError::Config {
            file: env_source.clone(),
            message: format!("SHOTPUB_WATCH_INTERVAL_MS is not a number: '{}'", interval),
        })?;
    }

    // SHOTPUB_FRAME_RANGE (start:end)
    if let Ok(range) = std::env::var("SHOTPUB_FRAME_RANGE") {
        let (start, end) = parse_frame_range(&range).ok_or_else(|| ShotpubError::Config {
            file: env_source.clone(),
            message: format!("SHOTPUB_FRAME_RANGE must look like 'start:end', got '{}'", range),
        })?;
        config.export.frame_start = start;
        config.export.frame_end = end;
    }

    config.validate(&env_source)?;
    Ok(config)
}

pub(super) fn parse_frame_range(s: &str) -> Option<(i32, i32)> {
    let (start, end) = s.trim().split_once(':')?;
    Some((start.trim().parse().ok()?, end.trim().parse().ok()?))
}

/// 1-based line declaring `key` as `key = ..` or `[key]`
fn line_of_key(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let name = line.trim_start().trim_start_matches('[');
            name.split(['=', ']']).next().map(str::trim) == Some(key)
        })
        .map(|i| i + 1)
}

/// Closest known key of the same table, within two edits
fn suggest_key(section: Option<&str>, unknown: &str) -> Option<String> {
    let known: &[&str] = match section {
        None => &["project", "watch", "export"],
        Some("project") => &["root"],
        Some("watch") => &["interval_ms"],
        Some("export") => &["frame_start", "frame_end", "alembic_data_format"],
        Some(_) => &[],
    };
    known
        .iter()
        .map(|&candidate| (edit_distance(unknown, candidate), candidate))
        .filter(|&(distance, _)| distance <= 2)
        .min()
        .map(|(_, candidate)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + usize::from(ca != cb));
            diagonal = above;
        }
    }
    row[b.len()]
}
