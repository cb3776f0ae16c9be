//! Domain models and types for Clinicboard.
//!
//! This module contains the data contracts shared by every dashboard screen.
//! The records carry no behaviour beyond structural validation: filtering,
//! aggregation and status changes live in [`crate::core`].
//!
//! # Overview
//!
//! - **Strongly-typed identifiers** ([`PatientId`], [`DoctorId`], [`AppointmentId`], [`RecordId`])
//! - **Records** ([`Patient`], [`Doctor`], [`Appointment`], [`DocumentRecord`])
//! - **Error types** ([`ClinicError`], [`ValidationError`], [`InvalidTransitionError`],
//!   [`ReferenceResolutionError`])
//! - **Result type alias** ([`Result`])
//!
//! # Construction
//!
//! Records are built through builders that validate on `build()`:
//!
//! ```rust
//! use clinicboard::domain::{Appointment, AppointmentStatus, DoctorSummary, PatientSummary};
//! use clinicboard::domain::{AppointmentId, DoctorId, PatientId};
//! use chrono::NaiveDate;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let appointment = Appointment::builder()
//!     .id(AppointmentId::new("1")?)
//!     .patient(PatientSummary::new(PatientId::new("P1")?, "Jane Doe"))
//!     .doctor(DoctorSummary::new(DoctorId::new("D1")?, "Dr. Adams"))
//!     .date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
//!     .time("09:30 AM")
//!     .kind("Consultation")
//!     .status(AppointmentStatus::Pending)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod appointment;
pub mod doctor;
pub mod errors;
pub mod ids;
pub mod patient;
pub mod records;
pub mod result;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentBuilder, AppointmentStatus, StatusTone};
pub use doctor::{Doctor, DoctorBuilder, DoctorSummary, Specialization};
pub use errors::{ClinicError, InvalidTransitionError, ReferenceResolutionError, ValidationError};
pub use ids::{AppointmentId, DoctorId, PatientId, RecordId};
pub use patient::{Gender, Patient, PatientBuilder, PatientSummary};
pub use records::{DocumentRecord, Finding, Medicine, Suggestion};
pub use result::Result;
