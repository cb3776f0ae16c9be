//! Appointment domain model and the canonical status vocabulary

use super::doctor::DoctorSummary;
use super::errors::ValidationError;
use super::ids::{AppointmentId, DoctorId, PatientId};
use super::patient::PatientSummary;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Appointment status
///
/// One vocabulary for every dashboard screen. `Completed`, `Cancelled` and
/// `Rejected` are terminal: see [`crate::core::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Confirmed,
    Processing,
    #[serde(alias = "on hold")]
    OnHold,
    #[serde(alias = "in transit")]
    InTransit,
    Completed,
    Cancelled,
    Rejected,
}

/// Visual weight of a status, shared by every badge and colour map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Positive,
    Neutral,
    Attention,
    Negative,
}

impl AppointmentStatus {
    /// Every status in declaration order
    pub const ALL: [AppointmentStatus; 9] = [
        Self::Pending,
        Self::Scheduled,
        Self::Confirmed,
        Self::Processing,
        Self::OnHold,
        Self::InTransit,
        Self::Completed,
        Self::Cancelled,
        Self::Rejected,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::OnHold => "on_hold",
            Self::InTransit => "in_transit",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Rejected => "rejected",
        }
    }

    /// Display label, as shown on status badges
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Scheduled => "Scheduled",
            Self::Confirmed => "Confirmed",
            Self::Processing => "Processing",
            Self::OnHold => "On Hold",
            Self::InTransit => "In Transit",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Rejected => "Rejected",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Completed | Self::Confirmed => StatusTone::Positive,
            Self::Pending | Self::Scheduled | Self::Processing => StatusTone::Neutral,
            Self::OnHold | Self::InTransit => StatusTone::Attention,
            Self::Cancelled | Self::Rejected => StatusTone::Negative,
        }
    }

    /// Terminal statuses absorb: no transition leaves them
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Rejected)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ValidationError;

    /// Accepts the wire form and the spaced UI forms, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                ValidationError::new("status", format!("'{s}' is not a valid appointment status"))
            })
    }
}

/// An appointment binding one patient to one doctor
///
/// The patient and doctor references never change after creation.
/// Rescheduling is a status transition, not a new reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,

    /// Embedded patient copy; `None` when the reference did not resolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientSummary>,

    /// Embedded doctor copy; `None` when the reference did not resolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorSummary>,

    pub date: NaiveDate,

    /// Local time of day, as entered (e.g. "10:30 AM")
    pub time: String,

    /// Consultation category, free-form
    #[serde(rename = "type")]
    pub kind: String,

    pub status: AppointmentStatus,

    #[serde(default)]
    pub notes: String,
}

impl Appointment {
    /// Creates a new builder for constructing an Appointment
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::default()
    }

    /// Structural validation
    ///
    /// Embedded summaries, when present, must agree with the references.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.time.trim().is_empty() {
            return Err(ValidationError::new("time", "cannot be empty"));
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::new("type", "cannot be empty"));
        }
        if let Some(patient) = &self.patient {
            if patient.id != self.patient_id {
                return Err(ValidationError::new(
                    "patient",
                    format!(
                        "embedded patient {} does not match reference {}",
                        patient.id, self.patient_id
                    ),
                ));
            }
        }
        if let Some(doctor) = &self.doctor {
            if doctor.id != self.doctor_id {
                return Err(ValidationError::new(
                    "doctor",
                    format!(
                        "embedded doctor {} does not match reference {}",
                        doctor.id, self.doctor_id
                    ),
                ));
            }
        }
        Ok(())
    }

    pub fn patient_name(&self) -> Option<&str> {
        self.patient.as_ref().map(|p| p.name.as_str())
    }

    pub fn doctor_name(&self) -> Option<&str> {
        self.doctor.as_ref().map(|d| d.name.as_str())
    }

    /// Copy of this appointment carrying `status`; nothing else changes
    pub(crate) fn with_status(&self, status: AppointmentStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Builder for constructing Appointment instances
#[derive(Debug, Default)]
pub struct AppointmentBuilder {
    id: Option<AppointmentId>,
    patient_id: Option<PatientId>,
    doctor_id: Option<DoctorId>,
    patient: Option<PatientSummary>,
    doctor: Option<DoctorSummary>,
    date: Option<NaiveDate>,
    time: Option<String>,
    kind: Option<String>,
    status: Option<AppointmentStatus>,
    notes: String,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: AppointmentId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn patient_id(mut self, id: PatientId) -> Self {
        self.patient_id = Some(id);
        self
    }

    pub fn doctor_id(mut self, id: DoctorId) -> Self {
        self.doctor_id = Some(id);
        self
    }

    /// Sets the embedded patient and its reference together
    pub fn patient(mut self, patient: PatientSummary) -> Self {
        self.patient_id = Some(patient.id.clone());
        self.patient = Some(patient);
        self
    }

    /// Sets the embedded doctor and its reference together
    pub fn doctor(mut self, doctor: DoctorSummary) -> Self {
        self.doctor_id = Some(doctor.id.clone());
        self.doctor = Some(doctor);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds the Appointment
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first missing or malformed field
    pub fn build(self) -> Result<Appointment, ValidationError> {
        let appointment = Appointment {
            id: self.id.ok_or(ValidationError::missing("id"))?,
            patient_id: self.patient_id.ok_or(ValidationError::missing("patient"))?,
            doctor_id: self.doctor_id.ok_or(ValidationError::missing("doctor"))?,
            patient: self.patient,
            doctor: self.doctor,
            date: self.date.ok_or(ValidationError::missing("date"))?,
            time: self.time.ok_or(ValidationError::missing("time"))?,
            kind: self.kind.ok_or(ValidationError::missing("type"))?,
            status: self.status.ok_or(ValidationError::missing("status"))?,
            notes: self.notes,
        };
        appointment.validate()?;
        Ok(appointment)
    }
}
