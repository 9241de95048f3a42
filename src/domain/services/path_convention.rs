//! Path convention
//!
//! Maps logical locations to directories and derives the tag that prefixes
//! every artifact file name. Everything here is a pure function of its
//! arguments.
//!
//! Layout:
//!
//! ```text
//! {root}/publish/sequence/{seq}/{shot}/{asset subfolder}
//! {root}/wip/sequence/{seq}/{shot}/scenes
//! ```

use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::{AssetLocator, AssetType, ExportFormat, Stage};
use crate::error::{ShotpubError, ShotpubResult};

/// Placeholder for a missing sequence segment
pub const UNKNOWN_SEQUENCE: &str = "UnknownSeq";
/// Placeholder for a missing action segment
pub const UNKNOWN_ACTION: &str = "UnknownAction";

const SEQUENCE_DIR: &str = "sequence";
const WIP_SCENES_DIR: &str = "scenes";

/// Tag derived from an export directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTag {
    pub tag: String,
    /// Format every artifact in this directory is forced to, if any
    pub format_override: Option<ExportFormat>,
}

/// `{root}/publish/sequence`
pub fn sequences_dir(root: &Path) -> PathBuf {
    root.join(Stage::Publish.as_str()).join(SEQUENCE_DIR)
}

/// `{root}/publish/sequence/{seq}/{shot}`
pub fn shot_dir(root: &Path, sequence: &str, shot: &str) -> PathBuf {
    sequences_dir(root).join(sequence).join(shot)
}

pub fn publish_dir(root: &Path, sequence: &str, shot: &str, asset_type: AssetType) -> PathBuf {
    shot_dir(root, sequence, shot).join(asset_type.publish_subfolder())
}

pub fn wip_dir(root: &Path, sequence: &str, shot: &str) -> PathBuf {
    root.join(Stage::Wip.as_str())
        .join(SEQUENCE_DIR)
        .join(sequence)
        .join(shot)
        .join(WIP_SCENES_DIR)
}

/// Directory artifacts of `locator` are written to
pub fn export_dir(root: &Path, locator: &AssetLocator) -> PathBuf {
    match locator.stage {
        Stage::Publish => publish_dir(root, &locator.sequence, &locator.shot, locator.asset_type),
        Stage::Wip => wip_dir(root, &locator.sequence, &locator.shot),
    }
}

/// Stage of a path beneath `root`, from its first component.
///
/// `None` when `path` is outside `root` or under neither tree.
pub fn stage_of(root: &Path, path: &Path) -> Option<Stage> {
    let first = path.strip_prefix(root).ok()?.components().next()?;
    [Stage::Publish, Stage::Wip]
        .into_iter()
        .find(|stage| first.as_os_str() == stage.as_str())
}

/// True when `name` is exactly one normal path component
pub fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Reject sequence or shot names that would leave `{root}` or shift the
/// tag segments: empty, absolute, `.`/`..` or containing a separator.
pub fn check_slot(sequence: &str, shot: &str) -> ShotpubResult<()> {
    for (what, value) in [("sequence", sequence), ("shot", shot)] {
        if !is_single_segment(value) {
            return Err(ShotpubError::invalid_input(
                format!("{what} must be a single folder name, got {value:?}"),
                format!("{sequence}/{shot}"),
            ));
        }
    }
    Ok(())
}

pub fn check_locator(locator: &AssetLocator) -> ShotpubResult<()> {
    check_slot(&locator.sequence, &locator.shot)
}

/// Derive the base tag for artifacts written to `export_path`.
///
/// - publish: `{seg[-4]}_{description}_{seg[-3]}`
/// - wip: `{seg[-3]}_{seg[-2]}`, always `.mb`
///
/// Missing segments become [`UNKNOWN_SEQUENCE`] / [`UNKNOWN_ACTION`].
pub fn derive_base_tag(export_path: &Path, stage: Stage, description: &str) -> ShotpubResult<BaseTag> {
    let parts = segments(export_path);
    if parts.is_empty() {
        return Err(ShotpubError::invalid_input(
            "export path is empty",
            format!("stage {stage}"),
        ));
    }

    let from_end = |n: usize, fallback: &'static str| -> String {
        if parts.len() >= n {
            parts[parts.len() - n].to_string()
        } else {
            fallback.to_string()
        }
    };

    match stage {
        Stage::Publish => {
            let description = description.trim();
            if description.is_empty() {
                return Err(ShotpubError::invalid_input(
                    "description is empty",
                    export_path.display().to_string(),
                ));
            }
            let sequence = from_end(4, UNKNOWN_SEQUENCE);
            let action = from_end(3, UNKNOWN_ACTION);
            Ok(BaseTag {
                tag: format!("{sequence}_{description}_{action}"),
                format_override: None,
            })
        }
        Stage::Wip => {
            let sequence = from_end(3, UNKNOWN_SEQUENCE);
            let action = from_end(2, UNKNOWN_ACTION);
            Ok(BaseTag {
                tag: format!("{sequence}_{action}"),
                format_override: Some(ExportFormat::MayaBinary),
            })
        }
    }
}

fn segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}
