//! FileSystem port - abstraction over the directory tree holding artifacts
//!
//! The tree *is* the versioning ledger; every decision the domain makes is a
//! pure function of what this port reports.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or directory not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Other I/O error
    Io(PathBuf, std::io::Error),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened at
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(p) | FsError::PermissionDenied(p) | FsError::Io(p, _) => p,
        }
    }

    /// Convert into a plain `std::io::Error`
    pub fn into_io(self) -> std::io::Error {
        match self {
            FsError::NotFound(p) => std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not found: {}", p.display()),
            ),
            FsError::PermissionDenied(p) => std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", p.display()),
            ),
            FsError::Io(_, err) => err,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "Not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error at {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {}

/// One directory listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles that fail on demand
pub trait FileSystem: Send + Sync {
    /// List the entries of a directory. Names that are not valid UTF-8 are skipped.
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Last modification time
    fn modified(&self, path: &Path) -> FsResult<SystemTime>;

    /// Names of the subdirectories of `path`, sorted
    fn subdirectories(&self, path: &Path) -> FsResult<Vec<String>> {
        let mut names: Vec<String> = self
            .list_dir(path)?
            .into_iter()
            .filter(|e| e.is_dir)
            .map(|e| e.name)
            .collect();
        names.sort();
        Ok(names)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        (**self).list_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        (**self).modified(path)
    }
}
