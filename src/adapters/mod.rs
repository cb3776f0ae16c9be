//! Inbound collaborators for Clinicboard.
//!
//! The core only works on complete in-memory snapshots. Adapters are the
//! asynchronous boundary that produces them:
//!
//! - [`snapshot`] - snapshot sources (JSON file, in-memory)
//!
//! # Example
//!
//! ```rust,no_run
//! use clinicboard::adapters::snapshot::{JsonFileSource, SnapshotSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = JsonFileSource::new("clinic.json");
//! let snapshot = source.load().await?;
//! println!("{} appointments", snapshot.appointments.len());
//! # Ok(())
//! # }
//! ```

pub mod snapshot;
