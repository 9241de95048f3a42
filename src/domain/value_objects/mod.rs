//! Domain Value Objects
//!
//! Immutable value types describing where artifacts live and how they are named.

mod artifact_name;
mod asset_type;
mod export_format;
mod locator;
mod stage;

pub use artifact_name::ArtifactName;
pub use asset_type::AssetType;
pub use export_format::{ExportFormat, ExportMode};
pub use locator::AssetLocator;
pub use stage::Stage;
