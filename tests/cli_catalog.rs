//! Integration tests for `shotpub catalog`, `versions` and `rollback`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_shotpub")
}

fn shotpub(project: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .env("HOME", project)
        .env("XDG_CONFIG_HOME", project.join(".config"))
        .env_remove("SHOTPUB_PROJECT_ROOT")
        .env_remove("SHOTPUB_WATCH_INTERVAL_MS")
        .env_remove("SHOTPUB_FRAME_RANGE")
        .arg("--project")
        .arg(project)
        .args(args)
        .output()
        .unwrap()
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "x").unwrap();
}

fn seed(root: &Path) {
    let shot = root.join("publish/sequence/sq01/sh010");
    touch(&shot.join("set/source/sq01_dress_sh010_v001.mb"));
    touch(&shot.join("set/source/sq01_dress_sh010_v002.mb"));
    touch(&shot.join("layout/caches/fbx/sh010_cam_layout_v001.fbx"));
    touch(&shot.join("set/source/notes.txt"));
    fs::create_dir_all(root.join("publish/sequence/sq02/sh020")).unwrap();
}

#[test]
fn catalog_lists_latest_per_asset_type() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    let output = shotpub(dir.path(), &["catalog"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sq01"));
    assert!(stdout.contains("sq02"));
    assert!(stdout.contains("sq01_dress_sh010_v002.mb"));
    assert!(!stdout.contains("sq01_dress_sh010_v001.mb"));
    assert!(stdout.contains("sh010_cam_layout_v001.fbx"));
    assert!(stdout.contains("(no published assets)"));
}

#[test]
fn catalog_json_for_one_shot() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    let output = shotpub(dir.path(), &["catalog", "--json", "--sequence", "sq01", "--shot", "sh010"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type"], "catalog");
    let shot = &json["sequences"][0]["shots"][0];
    assert_eq!(shot["name"], "sh010");
    assert_eq!(shot["latest"]["set"]["label"], "sq01_dress_sh010_v002.mb");
    assert_eq!(shot["latest"]["set"]["version"], 2);
    assert_eq!(shot["latest"]["layout"]["format"], "fbx");
    assert!(shot["latest"].get("animation").is_none());
}

#[test]
fn catalog_on_missing_project_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let output = Command::new(bin())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("SHOTPUB_PROJECT_ROOT")
        .arg("--project")
        .arg(&missing)
        .arg("catalog")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn versions_lists_rollback_labels_in_order() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    let output = shotpub(
        dir.path(),
        &["versions", "--sequence", "sq01", "--shot", "sh010", "--asset-type", "set"],
    );
    assert!(output.status.success());
    let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(lines, vec!["sq01_dress_sh010_v001.mb", "sq01_dress_sh010_v002.mb"]);
}

#[test]
fn rollback_binds_listed_version() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    let output = shotpub(
        dir.path(),
        &[
            "rollback", "--json", "--sequence", "sq01", "--shot", "sh010", "--asset-type", "set",
            "--version", "sq01_dress_sh010_v001.mb",
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["namespace"], "sq01_sh010_set_rollback");
    assert_eq!(json["replaced_scene"], false);
}

#[test]
fn rollback_to_unknown_version_fails() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    let output = shotpub(
        dir.path(),
        &[
            "rollback", "--sequence", "sq01", "--shot", "sh010", "--asset-type", "set",
            "--version", "sq01_dress_sh010_v009.mb",
        ],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("sq01_dress_sh010_v009.mb"));
}

#[test]
fn unknown_config_key_is_a_warning() {
    let dir = tempdir().unwrap();
    seed(dir.path());
    fs::write(dir.path().join("shotpub.toml"), "[watch]\ninterval_msec = 500\n").unwrap();

    let output = shotpub(dir.path(), &["catalog"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown config key 'interval_msec'"), "{stderr}");
}
