//! Publish Use Case implementation

use std::path::{Path, PathBuf};

use crate::application::registry::ReferenceRegistry;
use crate::config::ExportConfig;
use crate::domain::ports::{CommitOptions, FileSystem, SceneEngine};
use crate::domain::services::{path_convention, ScanWarning, VersionResolver};
use crate::domain::value_objects::{ArtifactName, ExportFormat};
use crate::error::{PublishFailure, ShotpubError, ShotpubResult};

use super::options::PublishRequest;
use super::result::{PublishResult, PublishedArtifact};

/// Publish Pipeline
///
/// Runs on the session's control thread; the scene engine is not
/// reentrant and every commit blocks until the engine returns.
pub struct PublishPipeline<'a, F: FileSystem + ?Sized, E: SceneEngine + ?Sized> {
    fs: &'a F,
    engine: &'a E,
    registry: &'a ReferenceRegistry,
    root: &'a Path,
    export: &'a ExportConfig,
}

impl<'a, F: FileSystem + ?Sized, E: SceneEngine + ?Sized> PublishPipeline<'a, F, E> {
    pub fn new(
        fs: &'a F,
        engine: &'a E,
        registry: &'a ReferenceRegistry,
        root: &'a Path,
        export: &'a ExportConfig,
    ) -> Self {
        Self {
            fs,
            engine,
            registry,
            root,
            export,
        }
    }

    /// Publish every requested format as its own next version.
    ///
    /// Stops at the first failing format. If nothing was committed the
    /// underlying error is returned; otherwise a `PartialFailure` lists
    /// what was committed, what failed and what was skipped. Committed
    /// artifacts always get their baseline recorded.
    pub fn publish(&self, request: &PublishRequest) -> ShotpubResult<PublishResult> {
        let locator = &request.locator;
        path_convention::check_locator(locator)?;
        if request.formats.is_empty() {
            return Err(ShotpubError::invalid_input(
                "no export formats requested",
                locator.to_string(),
            ));
        }
        if request.description.trim().is_empty() {
            return Err(ShotpubError::invalid_input(
                "please enter a file description",
                locator.to_string(),
            ));
        }

        let directory = path_convention::export_dir(self.root, locator);
        self.fs
            .create_dir_all(&directory)
            .map_err(|e| ShotpubError::io(&directory, e.into_io()))?;

        let stage = path_convention::stage_of(self.root, &directory).ok_or_else(|| {
            ShotpubError::invalid_input(
                "export directory is outside the publish and wip trees",
                directory.display().to_string(),
            )
        })?;
        let base = path_convention::derive_base_tag(&directory, stage, &request.description)?;
        let formats = effective_formats(&request.formats, base.format_override);

        let resolver = VersionResolver::new(self.fs);
        let options = self.export.commit_options(&request.roots);
        let mut result = PublishResult {
            directory: directory.clone(),
            base_tag: base.tag.clone(),
            ..PublishResult::default()
        };

        for (index, &format) in formats.iter().enumerate() {
            match self.commit_one(&directory, &base.tag, format, request, &resolver, &options) {
                Ok((artifact, warning)) => {
                    result.warnings.extend(warning);
                    result.artifacts.push(artifact);
                }
                Err(err) => {
                    if result.artifacts.is_empty() {
                        return Err(err);
                    }
                    return Err(ShotpubError::PartialFailure(PublishFailure {
                        directory,
                        succeeded: result.paths(),
                        failed: format,
                        reason: failure_reason(&err),
                        skipped: formats[index + 1..].to_vec(),
                    }));
                }
            }
        }

        Ok(result)
    }

    fn commit_one(
        &self,
        directory: &Path,
        base_tag: &str,
        format: ExportFormat,
        request: &PublishRequest,
        resolver: &VersionResolver<'_, F>,
        options: &CommitOptions,
    ) -> ShotpubResult<(PublishedArtifact, Option<ScanWarning>)> {
        if format.mode().requires_selection() && request.roots.iter().all(|r| r.trim().is_empty()) {
            return Err(ShotpubError::invalid_input(
                "no valid roots specified",
                format!("{} {} -> {}", request.locator, format, directory.display()),
            ));
        }

        // Fresh scan per format: each extension keeps its own counter
        let scan = resolver.scan(directory, base_tag, format);
        let Some(version) = scan.next() else {
            return Err(ShotpubError::invalid_input(
                "no version numbers left for this tag",
                format!("{} {} -> {}", request.locator, format, directory.display()),
            ));
        };
        let name = ArtifactName::new(base_tag, version, format);
        let path: PathBuf = directory.join(name.file_name());

        self.engine
            .commit_artifact(&path, format, options)
            .map_err(|e| ShotpubError::EngineFailure {
                action: "commit",
                path: path.clone(),
                diagnostic: e.to_string(),
            })?;
        log::info!("{} published {} ({})", request.locator, name, format);

        match self.fs.modified(&path) {
            Ok(mtime) => self.registry.record_baseline(&path, mtime),
            Err(e) => log::warn!("no baseline for {}: {}", path.display(), e),
        }

        Ok((
            PublishedArtifact {
                format,
                version,
                path,
            },
            scan.warning,
        ))
    }
}

/// Apply the directory's forced format, then drop duplicates keeping order
fn effective_formats(requested: &[ExportFormat], forced: Option<ExportFormat>) -> Vec<ExportFormat> {
    if let Some(format) = forced {
        if requested.iter().any(|f| *f != format) {
            log::debug!("wip directory: forcing {} for all artifacts", format);
        }
        return vec![format];
    }
    let mut formats: Vec<ExportFormat> = Vec::with_capacity(requested.len());
    for format in requested {
        if !formats.contains(format) {
            formats.push(*format);
        }
    }
    formats
}

fn failure_reason(err: &ShotpubError) -> String {
    match err {
        ShotpubError::InvalidInput { message, .. } => message.clone(),
        ShotpubError::EngineFailure { diagnostic, .. } => diagnostic.clone(),
        other => other.to_string(),
    }
}
