//! Shotpub - versioned asset publish, resolve and rollback engine
//!
//! Shotpub names, versions and discovers scene artifacts laid out under a
//! `publish/sequence/{seq}/{shot}` (and `wip/...`) project tree, binds the
//! newest or a historical version into a working session, and polls bound
//! artifacts for external updates.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    AssetCatalog, LatestLoader, LoadReport, PublishRequest, PublishResult, ReferenceRegistry,
    RollbackMode, RollbackRequest, Session, UpdateWatcher,
};
pub use config::Config;
pub use domain::entities::{CatalogSnapshot, ReferenceHandle, VersionEntry};
pub use domain::value_objects::{ArtifactName, AssetLocator, AssetType, ExportFormat, Stage};
pub use error::{ErrorKind, PublishFailure, ShotpubError, ShotpubResult};
pub use infrastructure::{ConsoleNotificationSink, CopyEngine, JsonNotificationSink, LocalFs};
