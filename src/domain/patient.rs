//! Patient domain model

use super::errors::ValidationError;
use super::ids::PatientId;
use super::records::{validate_unique_ids, Finding, Suggestion};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
    #[serde(alias = "Other")]
    Other,
}

impl Gender {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ValidationError::new(
                "gender",
                format!("'{s}' is not one of: male, female, other"),
            )),
        }
    }
}

/// A registered patient
///
/// Patients are never hard-deleted. Appointment completion is reflected in
/// `total_appointments` and `last_appointment` by recomputing aggregates,
/// not by the status machine.
///
/// # Examples
///
/// ```
/// use clinicboard::domain::patient::{Gender, Patient};
/// use clinicboard::domain::ids::PatientId;
///
/// let patient = Patient::builder()
///     .id(PatientId::new("P1").unwrap())
///     .name("Jane Doe")
///     .email("jane@x.com")
///     .gender(Gender::Female)
///     .build()
///     .unwrap();
///
/// assert_eq!(patient.total_appointments, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub gender: Gender,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Free-text medical history
    #[serde(default)]
    pub medical_history: String,

    /// Lifetime appointment count
    #[serde(default)]
    pub total_appointments: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_appointment: Option<DateTime<Utc>>,

    #[serde(default)]
    pub findings: Vec<Finding>,

    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl Patient {
    /// Creates a new builder for constructing a Patient
    pub fn builder() -> PatientBuilder {
        PatientBuilder::default()
    }

    /// Structural validation of required fields and owned records
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "cannot be empty"));
        }
        validate_email(&self.email)?;
        validate_unique_ids("findings", &self.findings)?;
        validate_unique_ids("suggestions", &self.suggestions)?;
        Ok(())
    }

    /// The denormalised copy embedded in appointments
    pub fn summary(&self) -> PatientSummary {
        PatientSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            email: Some(self.email.clone()),
            phone: self.phone.clone(),
            gender: Some(self.gender),
        }
    }
}

pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::new("email", "cannot be empty"));
    }
    if !email.contains('@') {
        return Err(ValidationError::new(
            "email",
            format!("'{email}' is not an email address"),
        ));
    }
    Ok(())
}

/// Patient fields embedded in an appointment
///
/// The API returns appointments with the patient populated. Rosters are
/// rebuilt from these copies rather than re-fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: PatientId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl PatientSummary {
    /// Creates a summary with only the identifying fields
    pub fn new(id: PatientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            phone: None,
            gender: None,
        }
    }
}

/// Builder for constructing Patient instances
#[derive(Debug, Default)]
pub struct PatientBuilder {
    id: Option<PatientId>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    gender: Option<Gender>,
    date_of_birth: Option<NaiveDate>,
    address: Option<String>,
    medical_history: String,
    total_appointments: u32,
    last_appointment: Option<DateTime<Utc>>,
    findings: Vec<Finding>,
    suggestions: Vec<Suggestion>,
}

impl PatientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: PatientId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn medical_history(mut self, history: impl Into<String>) -> Self {
        self.medical_history = history.into();
        self
    }

    pub fn total_appointments(mut self, count: u32) -> Self {
        self.total_appointments = count;
        self
    }

    pub fn last_appointment(mut self, at: DateTime<Utc>) -> Self {
        self.last_appointment = Some(at);
        self
    }

    pub fn finding(mut self, finding: Finding) -> Self {
        self.findings.push(finding);
        self
    }

    pub fn suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Builds the Patient
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first missing or malformed field
    pub fn build(self) -> Result<Patient, ValidationError> {
        let patient = Patient {
            id: self.id.ok_or(ValidationError::missing("id"))?,
            name: self.name.ok_or(ValidationError::missing("name"))?,
            email: self.email.ok_or(ValidationError::missing("email"))?,
            phone: self.phone,
            gender: self.gender.ok_or(ValidationError::missing("gender"))?,
            date_of_birth: self.date_of_birth,
            address: self.address,
            medical_history: self.medical_history,
            total_appointments: self.total_appointments,
            last_appointment: self.last_appointment,
            findings: self.findings,
            suggestions: self.suggestions,
        };
        patient.validate()?;
        Ok(patient)
    }
}
