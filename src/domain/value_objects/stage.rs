//! Stage value object - publish tree vs work-in-progress tree

use serde::{Deserialize, Serialize};

/// Which directory tree an artifact belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Approved artifacts consumed downstream
    #[default]
    Publish,
    /// Work-in-progress scenes
    Wip,
}

impl Stage {
    /// Directory name of this stage directly under the project root
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Publish => "publish",
            Stage::Wip => "wip",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
