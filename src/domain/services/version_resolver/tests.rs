use super::*;
use crate::domain::ports::{DirEntry, FsError, FsResult};
use std::collections::HashMap;
use std::time::SystemTime;

/// In-memory listing; directories not in the map are missing.
#[derive(Default)]
struct StubFs {
    dirs: HashMap<PathBuf, Vec<&'static str>>,
    denied: Vec<PathBuf>,
}

impl StubFs {
    fn with_dir(mut self, dir: &str, files: Vec<&'static str>) -> Self {
        self.dirs.insert(PathBuf::from(dir), files);
        self
    }
}

impl FileSystem for StubFs {
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        if self.denied.iter().any(|d| d == path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        let files = self
            .dirs
            .get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        Ok(files
            .iter()
            .map(|name| DirEntry {
                name: name.to_string(),
                path: path.join(name),
                is_dir: !name.contains('.'),
            })
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }

    fn modified(&self, _path: &Path) -> FsResult<SystemTime> {
        Ok(SystemTime::UNIX_EPOCH)
    }
}

#[test]
fn empty_directory_starts_at_one() {
    let fs = StubFs::default().with_dir("/out", vec![]);
    let resolver = VersionResolver::new(&fs);

    assert_eq!(resolver.latest_version(Path::new("/out"), "sq01_sh010", ExportFormat::MayaBinary), None);
    assert_eq!(resolver.next_version(Path::new("/out"), "sq01_sh010", ExportFormat::MayaBinary), Some(1));
}

#[test]
fn next_is_max_plus_one_without_contiguity() {
    let fs = StubFs::default().with_dir(
        "/out",
        vec!["tag_v001.mb", "tag_v007.mb", "tag_v003.mb"],
    );
    let resolver = VersionResolver::new(&fs);

    assert_eq!(resolver.latest_version(Path::new("/out"), "tag", ExportFormat::MayaBinary), Some(7));
    assert_eq!(resolver.next_version(Path::new("/out"), "tag", ExportFormat::MayaBinary), Some(8));
}

#[test]
fn match_is_anchored_on_tag() {
    let fs = StubFs::default().with_dir(
        "/out",
        vec!["tagExtra_v001.abc", "xtag_v009.abc", "tag_v002.abc.bak"],
    );
    let resolver = VersionResolver::new(&fs);

    assert_eq!(resolver.latest_version(Path::new("/out"), "tag", ExportFormat::Alembic), None);
}

#[test]
fn each_extension_has_its_own_counter() {
    let fs = StubFs::default().with_dir(
        "/out",
        vec!["tag_v004.abc", "tag_v001.fbx"],
    );
    let resolver = VersionResolver::new(&fs);
    let dir = Path::new("/out");

    assert_eq!(resolver.next_version(dir, "tag", ExportFormat::Alembic), Some(5));
    assert_eq!(resolver.next_version(dir, "tag", ExportFormat::Fbx), Some(2));
    assert_eq!(resolver.next_version(dir, "tag", ExportFormat::Usd), Some(1));
}

#[test]
fn tags_with_regex_metacharacters_match_literally() {
    let fs = StubFs::default().with_dir("/out", vec!["a.b_v002.mb", "axb_v005.mb"]);
    let resolver = VersionResolver::new(&fs);

    assert_eq!(resolver.latest_version(Path::new("/out"), "a.b", ExportFormat::MayaBinary), Some(2));
}

#[test]
fn missing_directory_is_silent_empty_scan() {
    let fs = StubFs::default();
    let scan = VersionResolver::new(&fs).scan(Path::new("/nope"), "tag", ExportFormat::MayaBinary);

    assert!(scan.versions.is_empty());
    assert!(scan.warning.is_none());
    assert_eq!(scan.next(), Some(1));
}

#[test]
fn unreadable_directory_warns_and_scans_empty() {
    let mut fs = StubFs::default().with_dir("/locked", vec!["tag_v003.mb"]);
    fs.denied.push(PathBuf::from("/locked"));
    let scan = VersionResolver::new(&fs).scan(Path::new("/locked"), "tag", ExportFormat::MayaBinary);

    assert_eq!(scan.next(), Some(1));
    let warning = scan.warning.expect("warning expected");
    assert_eq!(warning.directory, PathBuf::from("/locked"));
    assert!(warning.to_string().contains("/locked"));
}

#[test]
fn directories_named_like_artifacts_are_ignored() {
    let fs = StubFs::default().with_dir("/out", vec!["tag_v001.mb"]);
    let mut listing = fs.list_dir(Path::new("/out")).unwrap();
    listing[0].is_dir = true;
    let fs = DirOnly(listing);

    assert_eq!(
        VersionResolver::new(&fs).latest_version(Path::new("/out"), "tag", ExportFormat::MayaBinary),
        None
    );
}

struct DirOnly(Vec<DirEntry>);

impl FileSystem for DirOnly {
    fn list_dir(&self, _path: &Path) -> FsResult<Vec<DirEntry>> {
        Ok(self.0.clone())
    }
    fn exists(&self, _path: &Path) -> bool {
        true
    }
    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }
    fn modified(&self, _path: &Path) -> FsResult<SystemTime> {
        Ok(SystemTime::UNIX_EPOCH)
    }
}

#[test]
fn exhausted_counter_has_no_next_version() {
    let fs = StubFs::default().with_dir("/out", vec!["tag_v4294967295.mb", "tag_v4294967294.abc"]);
    let resolver = VersionResolver::new(&fs);

    assert_eq!(resolver.latest_version(Path::new("/out"), "tag", ExportFormat::MayaBinary), Some(u32::MAX));
    assert_eq!(resolver.next_version(Path::new("/out"), "tag", ExportFormat::MayaBinary), None);
    assert_eq!(resolver.next_version(Path::new("/out"), "tag", ExportFormat::Alembic), Some(u32::MAX));
}
