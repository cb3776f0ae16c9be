//! Collection indexer: distinct option sets for selection controls
//!
//! Dropdowns are populated from live data. [`distinct_values`] keeps values in
//! first-seen order so the options appear in the same order on every render.

use crate::domain::{Appointment, AppointmentStatus, Doctor, Gender, Patient, Specialization};
use std::collections::HashSet;
use std::hash::Hash;

/// Values the indexer can recognise as blank
///
/// Blank values are placeholders, never options.
pub trait OptionValue {
    fn is_blank(&self) -> bool {
        false
    }
}

impl OptionValue for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl OptionValue for &str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl OptionValue for AppointmentStatus {}
impl OptionValue for Specialization {}
impl OptionValue for Gender {}
impl OptionValue for chrono::NaiveDate {}

/// Distinct, non-blank selector results in first-seen order
///
/// `None` and blank results are dropped. The output never holds duplicates
/// and is never longer than the input.
///
/// # Examples
///
/// ```
/// use clinicboard::core::indexer::distinct_values;
///
/// let names = ["Dr.B", "", "Dr.A", "Dr.B"];
/// let options = distinct_values(&names, |n| Some(n.to_string()));
/// assert_eq!(options, vec!["Dr.B".to_string(), "Dr.A".to_string()]);
/// ```
pub fn distinct_values<T, V, F>(collection: &[T], selector: F) -> Vec<V>
where
    V: Eq + Hash + Clone + OptionValue,
    F: Fn(&T) -> Option<V>,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for item in collection {
        let Some(value) = selector(item) else {
            continue;
        };
        if value.is_blank() {
            continue;
        }
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }
    values
}

/// Doctor names found on appointments
pub fn doctor_name_options(appointments: &[Appointment]) -> Vec<String> {
    distinct_values(appointments, |a| a.doctor_name().map(str::to_string))
}

/// Patient names found on appointments
pub fn patient_name_options(appointments: &[Appointment]) -> Vec<String> {
    distinct_values(appointments, |a| a.patient_name().map(str::to_string))
}

pub fn status_options(appointments: &[Appointment]) -> Vec<AppointmentStatus> {
    distinct_values(appointments, |a| Some(a.status))
}

/// Consultation categories found on appointments
pub fn appointment_type_options(appointments: &[Appointment]) -> Vec<String> {
    distinct_values(appointments, |a| Some(a.kind.clone()))
}

pub fn appointment_date_options(appointments: &[Appointment]) -> Vec<chrono::NaiveDate> {
    distinct_values(appointments, |a| Some(a.date))
}

pub fn specialization_options(doctors: &[Doctor]) -> Vec<Specialization> {
    distinct_values(doctors, |d| Some(d.specialization))
}

pub fn gender_options(patients: &[Patient]) -> Vec<Gender> {
    distinct_values(patients, |p| Some(p.gender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppointmentId, DoctorId, DoctorSummary, PatientId};
    use chrono::NaiveDate;

    fn appt(id: &str, doctor: Option<&str>, status: AppointmentStatus) -> Appointment {
        let mut a = Appointment::builder()
            .id(AppointmentId::new(id).unwrap())
            .patient_id(PatientId::new("P1").unwrap())
            .doctor_id(DoctorId::new("d").unwrap())
            .date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .time("10:00")
            .kind("Checkup")
            .status(status)
            .build()
            .unwrap();
        a.doctor = doctor.map(|name| DoctorSummary::new(DoctorId::new("d").unwrap(), name));
        a
    }

    #[test]
    fn test_first_seen_order_not_sorted() {
        let values = distinct_values(&["c", "a", "c", "b", "a"], |v| Some(*v));
        assert_eq!(values, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_drops_missing_and_blank() {
        let appointments = vec![
            appt("1", Some("Dr.B"), AppointmentStatus::Pending),
            appt("2", None, AppointmentStatus::Pending),
            appt("3", Some("  "), AppointmentStatus::Completed),
            appt("4", Some("Dr.A"), AppointmentStatus::Pending),
        ];
        assert_eq!(doctor_name_options(&appointments), vec!["Dr.B", "Dr.A"]);
        assert_eq!(
            status_options(&appointments),
            vec![AppointmentStatus::Pending, AppointmentStatus::Completed]
        );
    }

    #[test]
    fn test_empty_collection() {
        let empty: Vec<Appointment> = Vec::new();
        assert!(doctor_name_options(&empty).is_empty());
        assert!(appointment_type_options(&empty).is_empty());
    }

    #[test]
    fn test_repeated_calls_identical() {
        let appointments = vec![
            appt("1", Some("Dr.C"), AppointmentStatus::Scheduled),
            appt("2", Some("Dr.A"), AppointmentStatus::Pending),
        ];
        assert_eq!(
            doctor_name_options(&appointments),
            doctor_name_options(&appointments)
        );
    }
}
