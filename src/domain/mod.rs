//! Domain Layer
//!
//! Naming rules, path convention and version resolution for versioned
//! artifacts.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Stage, AssetType, ExportFormat, AssetLocator, ArtifactName)
//! - `entities/` - Scan and binding records (VersionEntry, CatalogSnapshot, ReferenceHandle)
//! - `services/` - Path convention and version resolver
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Directory listings go through the `FileSystem` port
//! 2. **Pure Functions** - Path and tag derivation are stateless
//! 3. **Ports & Adapters** - The scene engine and notification sinks are traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
