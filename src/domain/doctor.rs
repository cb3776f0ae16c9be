//! Doctor domain model

use super::appointment::Appointment;
use super::errors::ValidationError;
use super::ids::DoctorId;
use super::patient::validate_email;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Medical specialty, from the fixed list offered at doctor registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Specialization {
    GeneralPractice,
    Cardiology,
    Dermatology,
    Neurology,
    Pediatrics,
    Orthopedics,
    Psychiatry,
    Oncology,
    Gynecology,
    Ophthalmology,
    Ent,
    Radiology,
}

impl Specialization {
    /// Every specialty, in registration-form order
    pub const ALL: [Specialization; 12] = [
        Self::GeneralPractice,
        Self::Cardiology,
        Self::Dermatology,
        Self::Neurology,
        Self::Pediatrics,
        Self::Orthopedics,
        Self::Psychiatry,
        Self::Oncology,
        Self::Gynecology,
        Self::Ophthalmology,
        Self::Ent,
        Self::Radiology,
    ];

    /// Human-readable name, also the wire form
    pub fn name(&self) -> &'static str {
        match self {
            Self::GeneralPractice => "General Practice",
            Self::Cardiology => "Cardiology",
            Self::Dermatology => "Dermatology",
            Self::Neurology => "Neurology",
            Self::Pediatrics => "Pediatrics",
            Self::Orthopedics => "Orthopedics",
            Self::Psychiatry => "Psychiatry",
            Self::Oncology => "Oncology",
            Self::Gynecology => "Gynecology",
            Self::Ophthalmology => "Ophthalmology",
            Self::Ent => "ENT",
            Self::Radiology => "Radiology",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Specialization {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|spec| spec.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::new(
                    "specialization",
                    format!("'{s}' is not a recognised specialization"),
                )
            })
    }
}

impl TryFrom<String> for Specialization {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Specialization> for String {
    fn from(spec: Specialization) -> Self {
        spec.name().to_string()
    }
}

/// A doctor registered by an administrator
///
/// `rating` and `patient_count` stay `None` when the source does not supply
/// them; presentation code decides how to render an absent value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialization: Specialization,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Years of experience
    #[serde(default)]
    pub experience: u32,

    /// Rating between 0.0 and 5.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_count: Option<u32>,
}

impl Doctor {
    /// Creates a new builder for constructing a Doctor
    pub fn builder() -> DoctorBuilder {
        DoctorBuilder::default()
    }

    /// Structural validation
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "cannot be empty"));
        }
        validate_email(&self.email)?;
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(ValidationError::new(
                    "rating",
                    format!("{rating} is outside 0.0..=5.0"),
                ));
            }
        }
        Ok(())
    }

    /// The denormalised copy embedded in appointments
    pub fn summary(&self) -> DoctorSummary {
        DoctorSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            specialization: Some(self.specialization),
        }
    }

    /// Changes the specialization while no appointment references this doctor
    ///
    /// # Errors
    ///
    /// Fails once any appointment in `appointments` points at this doctor.
    pub fn change_specialization(
        &mut self,
        specialization: Specialization,
        appointments: &[Appointment],
    ) -> Result<(), ValidationError> {
        if specialization == self.specialization {
            return Ok(());
        }
        let referenced = appointments.iter().any(|a| a.doctor_id == self.id);
        if referenced {
            return Err(ValidationError::new(
                "specialization",
                format!(
                    "doctor {} is referenced by appointments and cannot change specialization",
                    self.id
                ),
            ));
        }
        self.specialization = specialization;
        Ok(())
    }
}

/// Doctor fields embedded in an appointment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: DoctorId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Specialization>,
}

impl DoctorSummary {
    pub fn new(id: DoctorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialization: None,
        }
    }
}

/// Builder for constructing Doctor instances
#[derive(Debug, Default)]
pub struct DoctorBuilder {
    id: Option<DoctorId>,
    name: Option<String>,
    specialization: Option<Specialization>,
    email: Option<String>,
    phone: Option<String>,
    experience: u32,
    rating: Option<f64>,
    image: Option<String>,
    patient_count: Option<u32>,
}

impl DoctorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: DoctorId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn specialization(mut self, specialization: Specialization) -> Self {
        self.specialization = Some(specialization);
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

    pub fn experience(mut self, years: u32) -> Self {
        self.experience = years;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn patient_count(mut self, count: u32) -> Self {
        self.patient_count = Some(count);
        self
    }

    /// Builds the Doctor
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first missing or malformed field
    pub fn build(self) -> Result<Doctor, ValidationError> {
        let doctor = Doctor {
            id: self.id.ok_or(ValidationError::missing("id"))?,
            name: self.name.ok_or(ValidationError::missing("name"))?,
            specialization: self
                .specialization
                .ok_or(ValidationError::missing("specialization"))?,
            email: self.email.ok_or(ValidationError::missing("email"))?,
            phone: self.phone,
            experience: self.experience,
            rating: self.rating,
            image: self.image,
            patient_count: self.patient_count,
        };
        doctor.validate()?;
        Ok(doctor)
    }
}
