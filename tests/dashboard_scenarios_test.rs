//! End-to-end dashboard scenarios over the bundled snapshot fixture

use clinicboard::adapters::snapshot::{JsonFileSource, SnapshotSource};
use clinicboard::core::aggregate::{
    by_doctor_name, count_by_status, latest_appointment_by_patient,
    latest_appointment_for_patients, roster_for_doctor,
};
use clinicboard::core::diagnostics::Diagnostics;
use clinicboard::core::indexer::{doctor_name_options, specialization_options, status_options};
use clinicboard::core::query::{filter, filter_reporting, AppointmentQuery, PatientQuery, RecordQuery};
use clinicboard::core::snapshot::ClinicSnapshot;
use clinicboard::core::status::{transition, transition_str};
use clinicboard::domain::{
    Appointment, AppointmentId, AppointmentStatus, DoctorId, DoctorSummary, Gender,
    InvalidTransitionError, Patient, PatientId, PatientSummary, ReferenceResolutionError,
    Specialization,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/clinic.json");

async fn resolved_fixture() -> (ClinicSnapshot, Diagnostics) {
    let raw = JsonFileSource::new(FIXTURE).load().await.unwrap();
    let mut diagnostics = Diagnostics::new();
    let snapshot = raw.with_resolved_references(&mut diagnostics);
    (snapshot, diagnostics)
}

fn ids(appointments: &[Appointment]) -> Vec<&str> {
    appointments.iter().map(|a| a.id.as_str()).collect()
}

fn appt(id: &str, status: AppointmentStatus, patient: &str, doctor: &str) -> Appointment {
    Appointment::builder()
        .id(AppointmentId::new(id).unwrap())
        .patient(PatientSummary::new(PatientId::new(patient).unwrap(), patient))
        .doctor(DoctorSummary::new(DoctorId::new(doctor).unwrap(), doctor))
        .date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
        .time("09:30 AM")
        .kind("Consultation")
        .status(status)
        .build()
        .unwrap()
}

#[test]
fn test_latest_and_status_counts_follow_input_order() {
    let appointments = vec![
        appt("1", AppointmentStatus::Pending, "P1", "Dr.A"),
        appt("2", AppointmentStatus::Completed, "P1", "Dr.B"),
    ];

    let latest = latest_appointment_by_patient(&appointments);
    let p1 = PatientId::new("P1").unwrap();
    assert_eq!(latest[&p1].map(|a| a.id.as_str()), Some("1"));

    let counts = count_by_status(&appointments);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&AppointmentStatus::Pending], 1);
    assert_eq!(counts[&AppointmentStatus::Completed], 1);
}

#[test]
fn test_patient_search_matches_email() {
    let patient = |id: &str, name: &str, email: &str| {
        Patient::builder()
            .id(PatientId::new(id).unwrap())
            .name(name)
            .email(email)
            .gender(Gender::Female)
            .build()
            .unwrap()
    };
    let patients = vec![
        patient("P1", "Mary Smith", "jane@x.com"),
        patient("P2", "Ann Lee", "ann@x.com"),
    ];

    let visible = filter(&patients, &PatientQuery::new().with_search("jane"));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "P1");
}

#[test]
fn test_rejected_appointment_stays_rejected() {
    let rejected = appt("1", AppointmentStatus::Rejected, "P1", "Dr.A");
    let before = rejected.clone();

    let err = transition(&rejected, AppointmentStatus::Pending).unwrap_err();
    assert!(matches!(err, InvalidTransitionError::FromTerminal { .. }));
    assert_eq!(rejected, before);
}

#[tokio::test]
async fn test_fixture_resolution_reports_missing_patient() {
    let (snapshot, diagnostics) = resolved_fixture().await;

    assert_eq!(snapshot.appointments.len(), 4);
    assert_eq!(diagnostics.len(), 1);
    match &diagnostics.issues()[0] {
        ReferenceResolutionError::MissingPatient {
            appointment_id,
            patient_id,
        } => {
            assert_eq!(appointment_id.as_str(), "A4");
            assert_eq!(patient_id.as_str(), "P404");
        }
        other => panic!("unexpected issue: {other:?}"),
    }
}

#[tokio::test]
async fn test_fixture_option_lists() {
    let (snapshot, _) = resolved_fixture().await;

    assert_eq!(
        doctor_name_options(&snapshot.appointments),
        vec!["Dr. Adams".to_string(), "Dr. Baker".to_string()]
    );
    assert_eq!(
        status_options(&snapshot.appointments),
        vec![
            AppointmentStatus::Pending,
            AppointmentStatus::Completed,
            AppointmentStatus::OnHold,
        ]
    );
    assert_eq!(
        specialization_options(&snapshot.doctors),
        vec![Specialization::Cardiology, Specialization::Dermatology]
    );
}

#[tokio::test]
async fn test_fixture_search_across_fields() {
    let (snapshot, _) = resolved_fixture().await;
    let search = |term: &str| filter(&snapshot.appointments, &AppointmentQuery::new().with_search(term));

    assert_eq!(ids(&search("jane")), vec!["A1", "A3"]);
    assert_eq!(ids(&search("cardio")), vec!["A1", "A3"]);
    assert_eq!(ids(&search("ON HOLD")), vec!["A4"]);
    assert_eq!(ids(&search("2024-06")), vec!["A1", "A2"]);
    assert!(search("nobody").is_empty());
}

#[tokio::test]
async fn test_fixture_exact_filters_and_reporting() {
    let (snapshot, _) = resolved_fixture().await;

    let query = AppointmentQuery::new()
        .with_doctor("Dr. Baker")
        .with_kind("Consultation");
    let mut sink = Diagnostics::new();
    let visible = filter_reporting(&snapshot.appointments, &query, &mut sink);

    // A4 matches the doctor but its patient never resolved
    assert_eq!(ids(&visible), vec!["A4"]);
    assert_eq!(sink.len(), 1);

    let by_patient = AppointmentQuery::new().with_patient("Jane Doe");
    assert_eq!(ids(&filter(&snapshot.appointments, &by_patient)), vec!["A1", "A3"]);
}

#[tokio::test]
async fn test_fixture_roster_and_latest() {
    let (snapshot, _) = resolved_fixture().await;

    let roster = roster_for_doctor(&snapshot.appointments, by_doctor_name("Dr. Adams"));
    let names: Vec<_> = roster.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Doe"]);

    let latest = latest_appointment_for_patients(&snapshot.patients, &snapshot.appointments);
    let p1 = PatientId::new("P1").unwrap();
    let p3 = PatientId::new("P3").unwrap();
    assert_eq!(latest[&p1].map(|a| a.id.as_str()), Some("A1"));
    assert!(latest[&p3].is_none());
}

#[tokio::test]
async fn test_fixture_medicine_search() {
    let (snapshot, _) = resolved_fixture().await;

    let visible = filter(&snapshot.medicines, &RecordQuery::new("antibiotic"));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Amoxicillin 500mg");
}

#[tokio::test]
async fn test_fixture_transition_and_summary() {
    let (snapshot, _) = resolved_fixture().await;

    let a1 = snapshot.appointment(&AppointmentId::new("A1").unwrap()).unwrap();
    let confirmed = transition_str(a1, "confirmed").unwrap();
    assert_eq!(confirmed.status, AppointmentStatus::Confirmed);
    assert_eq!(a1.status, AppointmentStatus::Pending);

    let summary = snapshot.summary();
    assert_eq!(summary.total_patients, 3);
    assert_eq!(summary.total_doctors, 2);
    assert_eq!(summary.total_appointments, 4);
    assert_eq!(summary.open_appointments, 2);
    assert_eq!(summary.unresolved_appointments, 1);
}
