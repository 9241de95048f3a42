//! Publish Use Case
//!
//! Resolves the next version per format, commits each artifact through the
//! scene engine and records its baseline before returning.

mod options;
mod result;
mod use_case;


pub use options::PublishRequest;
pub use result::{PublishResult, PublishedArtifact};
pub use use_case::PublishPipeline;
