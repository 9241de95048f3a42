//! Asset locator - logical address of a slot in the sequence/shot hierarchy

use serde::{Deserialize, Serialize};

use super::{AssetType, Stage};

/// Identifies a logical slot independent of any specific file.
///
/// Ordering is by sequence, shot, asset type, then stage, which keeps
/// catalog snapshots in a stable, human-friendly order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetLocator {
    pub sequence: String,
    pub shot: String,
    pub asset_type: AssetType,
    pub stage: Stage,
}

impl AssetLocator {
    pub fn new(
        sequence: impl Into<String>,
        shot: impl Into<String>,
        asset_type: AssetType,
        stage: Stage,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            shot: shot.into(),
            asset_type,
            stage,
        }
    }

    pub fn publish(sequence: impl Into<String>, shot: impl Into<String>, asset_type: AssetType) -> Self {
        Self::new(sequence, shot, asset_type, Stage::Publish)
    }

    pub fn wip(sequence: impl Into<String>, shot: impl Into<String>, asset_type: AssetType) -> Self {
        Self::new(sequence, shot, asset_type, Stage::Wip)
    }

    /// Reference namespace for artifacts bound from this slot
    pub fn namespace(&self) -> String {
        format!("{}_{}_{}", self.sequence, self.shot, self.asset_type.as_str())
    }

    /// Namespace used when a historical version is bound
    pub fn rollback_namespace(&self) -> String {
        format!("{}_rollback", self.namespace())
    }
}

impl std::fmt::Display for AssetLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}@{}",
            self.sequence, self.shot, self.asset_type, self.stage
        )
    }
}
