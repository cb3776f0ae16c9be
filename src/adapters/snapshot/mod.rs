//! Snapshot sources
//!
//! - [`traits`] - the [`SnapshotSource`] seam and an in-memory implementation
//! - [`file`] - JSON file implementation used by the command-line host

pub mod file;
pub mod traits;

pub use file::JsonFileSource;
pub use traits::{SnapshotSource, StaticSource};
