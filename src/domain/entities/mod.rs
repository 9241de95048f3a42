//! Domain Entities
//!
//! Records produced by scanning the artifact tree and by binding artifacts
//! into a working session.

mod catalog;
mod reference;
mod version_entry;

pub use catalog::CatalogSnapshot;
pub use reference::ReferenceHandle;
pub use version_entry::VersionEntry;
