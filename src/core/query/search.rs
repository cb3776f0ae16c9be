//! Free-text search over per-record field sets

use crate::domain::{
    Appointment, DocumentRecord, Doctor, Patient, ReferenceResolutionError,
};
use std::borrow::Cow;

/// A record with a fixed set of free-text searchable fields
pub trait Searchable {
    /// The searchable fields; `None` marks a field whose source is missing
    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>>;

    /// References this record carries that did not resolve
    fn unresolved_references(&self) -> Vec<ReferenceResolutionError> {
        Vec::new()
    }
}

/// Case-insensitive substring match of `term` against any searchable field
///
/// An absent or empty term matches everything. Missing fields never match.
pub fn matches_search<T: Searchable + ?Sized>(record: &T, term: Option<&str>) -> bool {
    let term = match term {
        Some(term) if !term.is_empty() => term.to_lowercase(),
        _ => return true,
    };
    record
        .search_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

impl Searchable for Appointment {
    /// Patient name, doctor name, doctor specialization, status (wire form
    /// and label), date
    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![
            self.patient_name().map(Cow::Borrowed),
            self.doctor_name().map(Cow::Borrowed),
            self.doctor
                .as_ref()
                .and_then(|d| d.specialization)
                .map(|s| Cow::Borrowed(s.name())),
            Some(Cow::Borrowed(self.status.as_str())),
            Some(Cow::Borrowed(self.status.label())),
            Some(Cow::Owned(self.date.format("%Y-%m-%d").to_string())),
        ]
    }

    fn unresolved_references(&self) -> Vec<ReferenceResolutionError> {
        let mut gaps = Vec::new();
        if self.patient.is_none() {
            gaps.push(ReferenceResolutionError::MissingPatient {
                appointment_id: self.id.clone(),
                patient_id: self.patient_id.clone(),
            });
        }
        if self.doctor.is_none() {
            gaps.push(ReferenceResolutionError::MissingDoctor {
                appointment_id: self.id.clone(),
                doctor_id: self.doctor_id.clone(),
            });
        }
        gaps
    }
}

impl Searchable for Patient {
    /// Name, email, phone, gender
    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![
            Some(Cow::Borrowed(self.name.as_str())),
            Some(Cow::Borrowed(self.email.as_str())),
            self.phone.as_deref().map(Cow::Borrowed),
            Some(Cow::Borrowed(self.gender.as_str())),
        ]
    }
}

impl Searchable for Doctor {
    /// Name, specialization, email
    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![
            Some(Cow::Borrowed(self.name.as_str())),
            Some(Cow::Borrowed(self.specialization.name())),
            Some(Cow::Borrowed(self.email.as_str())),
        ]
    }
}

impl Searchable for DocumentRecord {
    /// Title and content
    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![
            Some(Cow::Borrowed(self.title.as_str())),
            Some(Cow::Borrowed(self.content.as_str())),
        ]
    }
}
