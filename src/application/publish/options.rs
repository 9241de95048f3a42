//! Publish Options

use crate::domain::value_objects::{AssetLocator, ExportFormat};

/// What to publish and where
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// Target slot
    pub locator: AssetLocator,
    /// Free-text description embedded in publish tags
    pub description: String,
    /// Requested formats, in commit order
    pub formats: Vec<ExportFormat>,
    /// Selection roots for formats that export a subset of the scene
    pub roots: Vec<String>,
}

impl PublishRequest {
    pub fn new(locator: AssetLocator, description: impl Into<String>) -> Self {
        Self {
            locator,
            description: description.into(),
            formats: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Set requested formats
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = ExportFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Set selection roots
    pub fn with_roots<S: Into<String>>(mut self, roots: impl IntoIterator<Item = S>) -> Self {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }
}
