//! Asset type value object - the four fixed publish slots of a shot

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of published asset within a shot
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Set dressing scene
    Set,
    /// Layout camera
    Layout,
    /// Character animation cache
    Animation,
    /// Prop cache
    Prop,
}

impl AssetType {
    /// All asset types, in enumeration order
    pub const ALL: [AssetType; 4] = [
        AssetType::Set,
        AssetType::Layout,
        AssetType::Animation,
        AssetType::Prop,
    ];

    /// Key used in namespaces and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Set => "set",
            AssetType::Layout => "layout",
            AssetType::Animation => "animation",
            AssetType::Prop => "prop",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Set => "set",
            AssetType::Layout => "layout (camera)",
            AssetType::Animation => "character animation cache",
            AssetType::Prop => "prop cache",
        }
    }

    /// Subfolder beneath a shot directory holding this type's artifacts
    pub fn publish_subfolder(&self) -> PathBuf {
        let segments: &[&str] = match self {
            AssetType::Set => &["set", "source"],
            AssetType::Layout => &["layout", "caches", "fbx"],
            AssetType::Animation => &["animation", "caches", "alembic"],
            AssetType::Prop => &["prop", "caches", "alembic"],
        };
        segments.iter().collect()
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn subfolders_follow_convention() {
        assert_eq!(AssetType::Set.publish_subfolder(), Path::new("set/source"));
        assert_eq!(
            AssetType::Layout.publish_subfolder(),
            Path::new("layout/caches/fbx")
        );
        assert_eq!(
            AssetType::Animation.publish_subfolder(),
            Path::new("animation/caches/alembic")
        );
        assert_eq!(
            AssetType::Prop.publish_subfolder(),
            Path::new("prop/caches/alembic")
        );
    }
}
