//! Scene Engine Implementations

mod copy;

pub use copy::CopyEngine;
