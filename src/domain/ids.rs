//! Domain identifier types with validation
//!
//! Newtype wrappers keep patient, doctor, appointment and child-record
//! identifiers from being mixed up. Every identifier must be non-empty after
//! trimming; deserialization goes through the same check.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, rejecting blank input
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::new($field, "cannot be empty"));
                }
                Ok(Self(id))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes self and returns the inner String
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Patient identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use clinicboard::domain::ids::PatientId;
    ///
    /// let id: PatientId = "P1".parse().unwrap();
    /// assert_eq!(id.as_str(), "P1");
    /// ```
    PatientId,
    "patient_id"
);

define_id!(
    /// Doctor identifier
    DoctorId,
    "doctor_id"
);

define_id!(
    /// Appointment identifier
    AppointmentId,
    "appointment_id"
);

define_id!(
    /// Identifier of a Finding, Suggestion or Medicine, unique within its parent collection
    RecordId,
    "record_id"
);
