use super::*;
use crate::error::ErrorKind;
use crate::infrastructure::LocalFs;
use std::fs;
use tempfile::tempdir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "x").unwrap();
}

fn set_dir(root: &Path, seq: &str, shot: &str) -> PathBuf {
    path_convention::publish_dir(root, seq, shot, AssetType::Set)
}

#[test]
fn missing_publish_tree_is_empty() {
    let dir = tempdir().unwrap();
    let catalog = AssetCatalog::new(LocalFs::new(), dir.path());

    assert!(catalog.enumerate_sequences().unwrap().is_empty());
    assert!(catalog.enumerate_shots("sq01").unwrap().is_empty());
    assert!(catalog.enumerate_asset_types("sq01", "sh010").unwrap().is_empty());
    assert!(catalog.snapshot().unwrap().is_empty());
}

#[test]
fn sequences_and_shots_are_sorted_directories() {
    let dir = tempdir().unwrap();
    let seq_root = path_convention::sequences_dir(dir.path());
    for p in ["sq02/sh020", "sq01/sh020", "sq01/sh010"] {
        fs::create_dir_all(seq_root.join(p)).unwrap();
    }
    touch(&seq_root.join("notes.txt"));

    let catalog = AssetCatalog::new(LocalFs::new(), dir.path());
    assert_eq!(catalog.enumerate_sequences().unwrap(), vec!["sq01", "sq02"]);
    assert_eq!(catalog.enumerate_shots("sq01").unwrap(), vec!["sh010", "sh020"]);
}

#[test]
fn only_populated_types_are_reported() {
    let dir = tempdir().unwrap();
    let set = set_dir(dir.path(), "sq01", "sh010");
    touch(&set.join("sq01_blockout_sh010_v001.mb"));
    touch(&set.join("sq01_blockout_sh010_v002.mb"));
    // Empty layout folder and an unrecognized prop file
    fs::create_dir_all(path_convention::publish_dir(dir.path(), "sq01", "sh010", AssetType::Layout)).unwrap();
    touch(&path_convention::publish_dir(dir.path(), "sq01", "sh010", AssetType::Prop).join("readme.txt"));

    let catalog = AssetCatalog::new(LocalFs::new(), dir.path());
    let types = catalog.enumerate_asset_types("sq01", "sh010").unwrap();

    assert_eq!(types.keys().copied().collect::<Vec<_>>(), vec![AssetType::Set]);
    assert_eq!(types[&AssetType::Set].label(), "sq01_blockout_sh010_v002.mb");
}

#[test]
fn latest_is_lexicographic_over_recognized_extensions() {
    let dir = tempdir().unwrap();
    let anim = path_convention::publish_dir(dir.path(), "sq01", "sh010", AssetType::Animation);
    touch(&anim.join("hero_v009.abc"));
    touch(&anim.join("hero_v010.abc"));
    touch(&anim.join("zz_notes.txt"));

    let catalog = AssetCatalog::new(LocalFs::new(), dir.path());
    let versions = catalog.list_versions("sq01", "sh010", AssetType::Animation).unwrap();

    let labels: Vec<String> = versions.iter().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["hero_v009.abc", "hero_v010.abc"]);
    assert_eq!(versions.last().unwrap().version, Some(10));
}

#[test]
fn snapshot_is_idempotent() {
    let dir = tempdir().unwrap();
    touch(&set_dir(dir.path(), "sq01", "sh010").join("a_v001.mb"));
    touch(&path_convention::publish_dir(dir.path(), "sq01", "sh020", AssetType::Layout).join("cam_v003.fbx"));
    touch(&path_convention::publish_dir(dir.path(), "sq02", "sh010", AssetType::Prop).join("crate_v001.abc"));

    let catalog = AssetCatalog::new(LocalFs::new(), dir.path());
    let first = catalog.snapshot().unwrap();
    let second = catalog.snapshot().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert_eq!(first.sequences(), vec!["sq01", "sq02"]);
    assert_eq!(first.shots("sq01"), vec!["sh010", "sh020"]);
}

#[test]
fn snapshot_does_not_see_later_changes() {
    let dir = tempdir().unwrap();
    let set = set_dir(dir.path(), "sq01", "sh010");
    touch(&set.join("a_v001.mb"));

    let catalog = AssetCatalog::new(LocalFs::new(), dir.path());
    let before = catalog.snapshot().unwrap();
    touch(&set.join("a_v002.mb"));
    let after = catalog.snapshot().unwrap();

    let loc = AssetLocator::publish("sq01", "sh010", AssetType::Set);
    assert_eq!(before.latest(&loc).unwrap().version, Some(1));
    assert_eq!(after.latest(&loc).unwrap().version, Some(2));
}

#[test]
fn slot_names_outside_the_tree_are_rejected() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    // A real publish layout one level above the project root
    touch(&set_dir(dir.path(), "sq01", "sh010").join("sq01_x_sh010_v001.mb"));
    let catalog = AssetCatalog::new(LocalFs::new(), &project);

    let absolute = dir.path().to_string_lossy().into_owned();
    for sequence in [absolute.as_str(), "../../..", "", "sq01/sh010"] {
        assert_eq!(
            catalog.enumerate_shots(sequence).unwrap_err().kind(),
            ErrorKind::InvalidInput,
            "{sequence:?}"
        );
        assert_eq!(
            catalog.list_versions(sequence, "sh010", AssetType::Set).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }
    assert!(catalog.enumerate_asset_types("sq01", "..").is_err());
}
