//! JSON file snapshot source

use super::traits::SnapshotSource;
use crate::core::snapshot::ClinicSnapshot;
use crate::domain::errors::ClinicError;
use crate::domain::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads a snapshot exported from the clinic API as one JSON document
///
/// The document holds `patients`, `doctors`, `appointments` and `medicines`
/// arrays; missing arrays are treated as empty.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    validate: bool,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            validate: true,
        }
    }

    /// Enables or disables structural validation after parsing
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn load(&self) -> Result<ClinicSnapshot> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ClinicError::Snapshot(format!(
                "Failed to read snapshot file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let snapshot: ClinicSnapshot = serde_json::from_str(&contents)?;

        if self.validate {
            snapshot.validate()?;
        }

        tracing::debug!(
            source = %self.describe(),
            patients = snapshot.patients.len(),
            doctors = snapshot.doctors.len(),
            appointments = snapshot.appointments.len(),
            "Snapshot loaded"
        );

        Ok(snapshot)
    }
}
