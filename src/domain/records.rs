//! Child records: findings, suggestions and the medicine catalog
//!
//! All three share one shape. Findings and suggestions are owned by a single
//! [`Patient`](super::patient::Patient); medicines form a shared catalog held
//! by the snapshot.

use super::errors::ValidationError;
use super::ids::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled, timestamped free-text document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Identifier, unique within the parent collection
    pub id: RecordId,

    /// Short title shown in lists
    pub title: String,

    /// When the document was uploaded
    pub uploaded: DateTime<Utc>,

    /// Free-text body
    #[serde(default)]
    pub content: String,
}

/// Clinical finding recorded against a patient
pub type Finding = DocumentRecord;

/// Care suggestion recorded against a patient
pub type Suggestion = DocumentRecord;

/// Entry in the shared medicine catalog
pub type Medicine = DocumentRecord;

impl DocumentRecord {
    /// Creates a record and validates it
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        uploaded: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let record = Self {
            id,
            title: title.into(),
            uploaded,
            content: content.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Structural validation
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title", "cannot be empty"));
        }
        Ok(())
    }
}

/// Checks that record ids are unique within one parent collection
pub(crate) fn validate_unique_ids(
    field: &'static str,
    records: &[DocumentRecord],
) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for record in records {
        record.validate()?;
        if !seen.insert(&record.id) {
            return Err(ValidationError::new(
                field,
                format!("duplicate record id '{}'", record.id),
            ));
        }
    }
    Ok(())
}
