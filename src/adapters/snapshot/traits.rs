//! Snapshot source abstraction
//!
//! The core never fetches data itself. A [`SnapshotSource`] materializes one
//! complete [`ClinicSnapshot`] per call; retries, timeouts and cancellation
//! belong to the implementation, never to the core.

use crate::core::snapshot::ClinicSnapshot;
use crate::domain::Result;
use async_trait::async_trait;

/// Supplier of complete clinic snapshots
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Short description used in log events
    fn describe(&self) -> String;

    /// Loads a full snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read, parsed or validated.
    async fn load(&self) -> Result<ClinicSnapshot>;
}

/// Source that hands out a snapshot already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshot: ClinicSnapshot,
}

impl StaticSource {
    pub fn new(snapshot: ClinicSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl SnapshotSource for StaticSource {
    fn describe(&self) -> String {
        "in-memory snapshot".to_string()
    }

    async fn load(&self) -> Result<ClinicSnapshot> {
        Ok(self.snapshot.clone())
    }
}
