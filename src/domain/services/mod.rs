//! Domain Services
//!
//! Path convention and version resolution. `path_convention` is pure;
//! `version_resolver` only reads directory listings through the
//! `FileSystem` port.

pub mod path_convention;
mod version_resolver;

pub use path_convention::BaseTag;
pub use version_resolver::{ScanWarning, VersionResolver, VersionScan};
