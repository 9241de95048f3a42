//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain naming or versioning rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AssetCatalog` - Enumerates sequences, shots and artifacts on disk
//! - `PublishPipeline` - Commits the next version of each requested format
//! - `RollbackService` - Binds a historical version
//! - `LatestLoader` - Binds the newest artifact of every asset type
//! - `UpdateWatcher` - Polls bound artifacts for external changes
//! - `Session` - Owns all of the above for one project root

pub mod catalog;
pub mod loader;
pub mod publish;
pub mod registry;
pub mod rollback;
pub mod session;
pub mod watch;

#[cfg(test)]
mod test_support;

pub use catalog::AssetCatalog;
pub use loader::{LatestLoader, LoadFailure, LoadReport};
pub use publish::{PublishPipeline, PublishRequest, PublishResult, PublishedArtifact};
pub use registry::{ReferenceRegistry, RegistrySnapshot};
pub use rollback::{RollbackMode, RollbackRequest, RollbackService};
pub use session::Session;
pub use watch::{UpdateWatcher, WatchKey, WatchState, WatcherStatus};
