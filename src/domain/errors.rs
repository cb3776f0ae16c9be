//! Domain error types
//!
//! This module defines the error hierarchy for Clinicboard. The three domain
//! error kinds (validation, status transition, reference resolution) are
//! separate types so callers can match on them directly; [`ClinicError`]
//! wraps them together with the ambient failures of the host application.

use crate::domain::appointment::AppointmentStatus;
use crate::domain::ids::{AppointmentId, DoctorId, PatientId};
use thiserror::Error;

/// Main Clinicboard error type
#[derive(Debug, Error)]
pub enum ClinicError {
    /// A domain value failed structural validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An appointment status transition was rejected
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransitionError),

    /// An appointment references a patient or doctor that does not exist
    #[error(transparent)]
    ReferenceResolution(#[from] ReferenceResolutionError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Snapshot loading or lookup errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// A malformed domain value, naming the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid field '{field}': {reason}")]
pub struct ValidationError {
    /// Name of the field that failed validation
    pub field: &'static str,

    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    /// Creates a new validation error for `field`
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Error for a required field that was never supplied
    pub fn missing(field: &'static str) -> Self {
        Self::new(field, "is required")
    }
}

/// A rejected appointment status transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTransitionError {
    /// The appointment is already in an absorbing state
    #[error("Cannot move appointment {appointment_id} from terminal status '{from}' to '{to}'")]
    FromTerminal {
        appointment_id: AppointmentId,
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    /// The requested target is not a known status
    #[error("Unknown appointment status '{0}'")]
    UnknownStatus(String),
}

/// An appointment whose patient or doctor reference does not resolve
///
/// This is a recoverable condition: predicates and aggregations treat the
/// missing side as a non-match and report the gap through a
/// [`DiagnosticSink`](crate::core::diagnostics::DiagnosticSink).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ReferenceResolutionError {
    /// Patient reference is dangling
    #[error("Appointment {appointment_id} references missing patient {patient_id}")]
    MissingPatient {
        appointment_id: AppointmentId,
        patient_id: PatientId,
    },

    /// Doctor reference is dangling
    #[error("Appointment {appointment_id} references missing doctor {doctor_id}")]
    MissingDoctor {
        appointment_id: AppointmentId,
        doctor_id: DoctorId,
    },
}

impl ReferenceResolutionError {
    /// The appointment carrying the dangling reference
    pub fn appointment_id(&self) -> &AppointmentId {
        match self {
            Self::MissingPatient { appointment_id, .. } => appointment_id,
            Self::MissingDoctor { appointment_id, .. } => appointment_id,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Configuration(format!("TOML parse error: {err}"))
    }
}
