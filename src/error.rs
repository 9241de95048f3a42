//! Error types for shotpub
//!
//! Library code returns `ShotpubError`; the binary wraps it with `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::ExportFormat;

/// Result type alias for shotpub operations
pub type ShotpubResult<T> = Result<T, ShotpubError>;

/// Coarse error classification, stable across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    PartialFailure,
    EngineFailure,
    IoFailure,
    Config,
}

/// Main error type for shotpub operations
#[derive(Error, Debug)]
pub enum ShotpubError {
    /// Missing file or directory where one was required
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    /// Caller supplied something unusable; the operation was aborted
    #[error("invalid input: {message} ({context})")]
    InvalidInput { message: String, context: String },

    /// Multi-format publish where some formats committed and one failed
    #[error("{0}")]
    PartialFailure(PublishFailure),

    /// The scene engine rejected a commit or load
    #[error("scene engine failed to {action} {path}: {diagnostic}")]
    EngineFailure {
        action: &'static str,
        path: PathBuf,
        diagnostic: String,
    },

    /// Directory creation, scan or metadata failure
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl ShotpubError {
    pub fn invalid_input(message: impl Into<String>, context: impl Into<String>) -> Self {
        ShotpubError::InvalidInput {
            message: message.into(),
            context: context.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShotpubError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ShotpubError::NotFound { .. } => ErrorKind::NotFound,
            ShotpubError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ShotpubError::PartialFailure(_) => ErrorKind::PartialFailure,
            ShotpubError::EngineFailure { .. } => ErrorKind::EngineFailure,
            ShotpubError::Io { .. } => ErrorKind::IoFailure,
            ShotpubError::Config { .. } => ErrorKind::Config,
        }
    }
}

impl From<FsError> for ShotpubError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => ShotpubError::NotFound { path },
            other => {
                let path = other.path().to_path_buf();
                ShotpubError::Io {
                    path,
                    source: other.into_io(),
                }
            }
        }
    }
}

/// Per-format outcome of an aborted multi-format publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishFailure {
    /// Target directory of the publish
    pub directory: PathBuf,
    /// Artifacts that were committed before the failure
    pub succeeded: Vec<PathBuf>,
    /// The format that failed
    pub failed: ExportFormat,
    /// Why it failed
    pub reason: String,
    /// Formats never attempted because of the abort
    pub skipped: Vec<ExportFormat>,
}

impl std::fmt::Display for PublishFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let succeeded: Vec<String> = self
            .succeeded
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.display().to_string())
            })
            .collect();
        write!(
            f,
            "partial publish in {}: committed [{}], {} failed: {}",
            self.directory.display(),
            succeeded.join(", "),
            self.failed,
            self.reason
        )?;
        if !self.skipped.is_empty() {
            let skipped: Vec<&str> = self.skipped.iter().map(|s| s.extension()).collect();
            write!(f, " (skipped: {})", skipped.join(", "))?;
        }
        Ok(())
    }
}
