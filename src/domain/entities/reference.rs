//! Reference handle - one artifact bound into the working session

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::AssetLocator;

/// One artifact currently bound into the session under a unique namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceHandle {
    pub namespace: String,
    pub locator: AssetLocator,
    pub resolved_path: PathBuf,
    pub loaded_at: DateTime<Utc>,
    /// Modification time of `resolved_path` when it was bound
    pub baseline: Option<SystemTime>,
}

impl ReferenceHandle {
    pub fn new(
        namespace: impl Into<String>,
        locator: AssetLocator,
        resolved_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            locator,
            resolved_path: resolved_path.into(),
            loaded_at: Utc::now(),
            baseline: None,
        }
    }

    pub fn with_baseline(mut self, baseline: SystemTime) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Display label used in update notifications
    pub fn artifact_label(&self) -> String {
        self.resolved_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.resolved_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AssetType;

    #[test]
    fn label_is_file_name() {
        let loc = AssetLocator::publish("sq01", "sh010", AssetType::Layout);
        let handle = ReferenceHandle::new(loc.namespace(), loc, "/p/x/cam_v004.fbx");
        assert_eq!(handle.artifact_label(), "cam_v004.fbx");
        assert!(handle.baseline.is_none());
    }
}
