//! Typed filter queries and the AND-composed predicate

use super::search::{matches_search, Searchable};
use crate::core::diagnostics::DiagnosticSink;
use crate::domain::{
    Appointment, AppointmentStatus, DocumentRecord, Doctor, Gender, Patient, Specialization,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A filter query for records of type `T`
///
/// The overall predicate is the AND of the search clause and every active
/// exact-match clause.
pub trait Query<T> {
    /// The free-text term, if any
    fn search(&self) -> Option<&str>;

    /// AND of the exact-match clauses; inactive clauses are vacuously true
    fn exact_matches(&self, record: &T) -> bool;
}

/// Treats an empty filter value as absent
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Case-sensitive equality; a missing field never satisfies an active filter
fn exact(field: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => field == Some(wanted),
    }
}

fn exact_eq<V: PartialEq>(field: V, wanted: Option<V>) -> bool {
    wanted.map_or(true, |wanted| field == wanted)
}

/// Appointment filters used by the admin, doctor and patient appointment lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentQuery {
    pub search: Option<String>,
    /// Exact doctor name
    pub doctor: Option<String>,
    /// Exact patient name
    pub patient: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub date: Option<NaiveDate>,
    /// Exact consultation category
    pub kind: Option<String>,
}

impl AppointmentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_doctor(mut self, doctor: impl Into<String>) -> Self {
        self.doctor = Some(doctor.into());
        self
    }

    pub fn with_patient(mut self, patient: impl Into<String>) -> Self {
        self.patient = Some(patient.into());
        self
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl Query<Appointment> for AppointmentQuery {
    fn search(&self) -> Option<&str> {
        active(&self.search)
    }

    fn exact_matches(&self, record: &Appointment) -> bool {
        exact(record.doctor_name(), active(&self.doctor))
            && exact(record.patient_name(), active(&self.patient))
            && exact_eq(record.status, self.status)
            && exact_eq(record.date, self.date)
            && exact(Some(record.kind.as_str()), active(&self.kind))
    }
}

/// Patient list filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientQuery {
    pub search: Option<String>,
    pub gender: Option<Gender>,
}

impl PatientQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

impl Query<Patient> for PatientQuery {
    fn search(&self) -> Option<&str> {
        active(&self.search)
    }

    fn exact_matches(&self, record: &Patient) -> bool {
        exact_eq(record.gender, self.gender)
    }
}

/// Doctor directory filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorQuery {
    pub search: Option<String>,
    pub specialization: Option<Specialization>,
}

impl DoctorQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_specialization(mut self, specialization: Specialization) -> Self {
        self.specialization = Some(specialization);
        self
    }
}

impl Query<Doctor> for DoctorQuery {
    fn search(&self) -> Option<&str> {
        active(&self.search)
    }

    fn exact_matches(&self, record: &Doctor) -> bool {
        exact_eq(record.specialization, self.specialization)
    }
}

/// Search over findings, suggestions and the medicine catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordQuery {
    pub search: Option<String>,
}

impl RecordQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
        }
    }
}

impl Query<DocumentRecord> for RecordQuery {
    fn search(&self) -> Option<&str> {
        active(&self.search)
    }

    fn exact_matches(&self, _record: &DocumentRecord) -> bool {
        true
    }
}

/// Evaluates `query` against one record
pub fn matches<T, Q>(record: &T, query: &Q) -> bool
where
    T: Searchable,
    Q: Query<T> + ?Sized,
{
    matches_search(record, query.search()) && query.exact_matches(record)
}

/// Records matching `query`, in input order; the input is left untouched
///
/// # Examples
///
/// ```
/// use clinicboard::core::query::{filter, PatientQuery};
/// use clinicboard::domain::{Gender, Patient, PatientId};
///
/// let patients = vec![
///     Patient::builder()
///         .id(PatientId::new("P1").unwrap())
///         .name("Mary Smith")
///         .email("jane@x.com")
///         .gender(Gender::Female)
///         .build()
///         .unwrap(),
/// ];
/// let visible = filter(&patients, &PatientQuery::new().with_search("jane"));
/// assert_eq!(visible.len(), 1);
/// ```
pub fn filter<T, Q>(collection: &[T], query: &Q) -> Vec<T>
where
    T: Searchable + Clone,
    Q: Query<T> + ?Sized,
{
    collection
        .iter()
        .filter(|record| matches(*record, query))
        .cloned()
        .collect()
}

/// Like [`filter`], reporting every unresolved reference it encounters
pub fn filter_reporting<T, Q>(
    collection: &[T],
    query: &Q,
    sink: &mut dyn DiagnosticSink,
) -> Vec<T>
where
    T: Searchable + Clone,
    Q: Query<T> + ?Sized,
{
    let mut visible = Vec::new();
    for record in collection {
        for gap in record.unresolved_references() {
            sink.report(gap);
        }
        if matches(record, query) {
            visible.push(record.clone());
        }
    }
    crate::log_filter_applied!(collection.len(), visible.len());
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::Diagnostics;
    use crate::domain::{AppointmentId, DoctorId, DoctorSummary, PatientId, PatientSummary};
    use pretty_assertions::assert_eq;

    fn appt(id: &str, patient: &str, doctor: Option<&str>, status: AppointmentStatus) -> Appointment {
        let mut builder = Appointment::builder()
            .id(AppointmentId::new(id).unwrap())
            .patient(PatientSummary::new(PatientId::new(patient).unwrap(), patient))
            .doctor_id(DoctorId::new("d").unwrap())
            .date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
            .time("10:00 AM")
            .kind("Consultation")
            .status(status);
        if let Some(name) = doctor {
            builder = builder.doctor(DoctorSummary::new(DoctorId::new("d").unwrap(), name));
        }
        builder.build().unwrap()
    }

    fn ids(appointments: &[Appointment]) -> Vec<&str> {
        appointments.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let xs = vec![
            appt("3", "Ann", Some("Dr.A"), AppointmentStatus::Pending),
            appt("1", "Bob", Some("Dr.B"), AppointmentStatus::Completed),
        ];
        assert_eq!(ids(&filter(&xs, &AppointmentQuery::new())), vec!["3", "1"]);
    }

    #[test]
    fn test_search_and_exact_filters_are_anded() {
        let xs = vec![
            appt("1", "Ann", Some("Dr.A"), AppointmentStatus::Pending),
            appt("2", "Ann", Some("Dr.B"), AppointmentStatus::Pending),
            appt("3", "Bob", Some("Dr.A"), AppointmentStatus::Pending),
        ];
        let query = AppointmentQuery::new().with_search("ann").with_doctor("Dr.A");
        assert_eq!(ids(&filter(&xs, &query)), vec!["1"]);
    }

    #[test]
    fn test_exact_filter_is_case_sensitive() {
        let xs = vec![appt("1", "Ann", Some("Dr.A"), AppointmentStatus::Pending)];
        assert!(filter(&xs, &AppointmentQuery::new().with_doctor("dr.a")).is_empty());
    }

    #[test]
    fn test_empty_filter_value_is_vacuous() {
        let xs = vec![appt("1", "Ann", Some("Dr.A"), AppointmentStatus::Pending)];
        let query = AppointmentQuery::new().with_doctor("").with_search("");
        assert_eq!(filter(&xs, &query).len(), 1);
    }

    #[test]
    fn test_missing_doctor_is_non_match_and_reported() {
        let xs = vec![
            appt("1", "Ann", None, AppointmentStatus::Pending),
            appt("2", "Ann", Some("Dr.A"), AppointmentStatus::Pending),
        ];
        let mut sink = Diagnostics::new();
        let visible = filter_reporting(&xs, &AppointmentQuery::new().with_doctor("Dr.A"), &mut sink);
        assert_eq!(ids(&visible), vec!["2"]);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.issues()[0].appointment_id().as_str(), "1");
    }

    #[test]
    fn test_status_filter() {
        let xs = vec![
            appt("1", "Ann", Some("Dr.A"), AppointmentStatus::Pending),
            appt("2", "Bob", Some("Dr.A"), AppointmentStatus::Completed),
        ];
        let query = AppointmentQuery::new().with_status(AppointmentStatus::Completed);
        assert_eq!(ids(&filter(&xs, &query)), vec!["2"]);
    }

    #[test]
    fn test_doctor_specialization_filter() {
        let doctors = vec![
            Doctor::builder()
                .id(DoctorId::new("d1").unwrap())
                .name("Dr. Adams")
                .specialization(Specialization::Cardiology)
                .email("a@c.org")
                .build()
                .unwrap(),
            Doctor::builder()
                .id(DoctorId::new("d2").unwrap())
                .name("Dr. Brown")
                .specialization(Specialization::Neurology)
                .email("b@c.org")
                .build()
                .unwrap(),
        ];
        let query = DoctorQuery::new().with_specialization(Specialization::Neurology);
        let visible = filter(&doctors, &query);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Dr. Brown");
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let xs = vec![appt("1", "Ann", Some("Dr.A"), AppointmentStatus::Pending)];
        let before = xs.clone();
        let _ = filter(&xs, &AppointmentQuery::new().with_search("zzz"));
        assert_eq!(xs, before);
    }
}
