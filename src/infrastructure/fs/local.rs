//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::Path;
use std::time::SystemTime;

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let read = std::fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            // Follow symlinks so linked shot folders behave like real ones
            let entry_path = entry.path();
            let is_dir = entry_path.is_dir();
            entries.push(DirEntry {
                name,
                path: entry_path,
                is_dir,
            });
        }
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| FsError::from_io(path, e))
    }
}
