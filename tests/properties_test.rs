//! Property tests for the query, aggregation and status core

use clinicboard::core::aggregate::{count_by_status, latest_appointment_by_patient};
use clinicboard::core::indexer::{distinct_values, doctor_name_options};
use clinicboard::core::query::{filter, AppointmentQuery};
use clinicboard::core::status::transition;
use clinicboard::domain::{
    Appointment, AppointmentId, AppointmentStatus, DoctorId, DoctorSummary, PatientId,
    PatientSummary, Specialization,
};
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::HashSet;

const PATIENTS: [&str; 4] = ["Jane Doe", "John Roe", "Mary Smith", "Ann Lee"];
const DOCTORS: [&str; 3] = ["Dr. Adams", "Dr. Baker", "Dr. Chen"];
const KINDS: [&str; 3] = ["Consultation", "Follow-up", "Checkup"];

fn status() -> impl Strategy<Value = AppointmentStatus> {
    prop::sample::select(AppointmentStatus::ALL.to_vec())
}

fn appointment(index: usize) -> impl Strategy<Value = Appointment> {
    (
        0..PATIENTS.len(),
        0..DOCTORS.len(),
        prop::option::of(prop::sample::select(Specialization::ALL.to_vec())),
        0..KINDS.len(),
        status(),
        1u32..=28,
        any::<bool>(),
    )
        .prop_map(move |(p, d, specialization, k, status, day, resolved)| {
            let patient_id = PatientId::new(format!("P{p}")).unwrap();
            let doctor_id = DoctorId::new(format!("D{d}")).unwrap();
            let mut builder = Appointment::builder()
                .id(AppointmentId::new(format!("A{index}")).unwrap())
                .patient_id(patient_id.clone())
                .doctor_id(doctor_id.clone())
                .date(NaiveDate::from_ymd_opt(2024, 6, day).unwrap())
                .time("09:30 AM")
                .kind(KINDS[k])
                .status(status);
            // Unresolved appointments keep the bare ids
            if resolved {
                let mut doctor = DoctorSummary::new(doctor_id, DOCTORS[d]);
                doctor.specialization = specialization;
                builder = builder
                    .patient(PatientSummary::new(patient_id, PATIENTS[p]))
                    .doctor(doctor);
            }
            builder.build().unwrap()
        })
}

fn appointments() -> impl Strategy<Value = Vec<Appointment>> {
    (0usize..24).prop_flat_map(|len| (0..len).map(appointment).collect::<Vec<_>>())
}

fn search_term() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "jane".to_string(),
        "dr.".to_string(),
        "hold".to_string(),
        "2024-06-1".to_string(),
        "CARDIO".to_string(),
        String::new(),
    ]))
}

fn apply_search(query: AppointmentQuery, search: &Option<String>) -> AppointmentQuery {
    match search {
        Some(term) => query.with_search(term),
        None => query,
    }
}

proptest! {
    #[test]
    fn filter_is_deterministic(xs in appointments(), search in search_term()) {
        let query = apply_search(AppointmentQuery::new(), &search);
        prop_assert_eq!(filter(&xs, &query), filter(&xs, &query));
    }

    #[test]
    fn distinct_values_is_deterministic(xs in appointments()) {
        prop_assert_eq!(doctor_name_options(&xs), doctor_name_options(&xs));
    }

    #[test]
    fn filter_composes_as_and(
        xs in appointments(),
        search in search_term(),
        doctor in prop::sample::select(DOCTORS.to_vec()),
    ) {
        let searched = filter(&xs, &apply_search(AppointmentQuery::new(), &search));
        let chained = filter(&searched, &AppointmentQuery::new().with_doctor(doctor));
        let combined = filter(
            &xs,
            &apply_search(AppointmentQuery::new(), &search).with_doctor(doctor),
        );
        prop_assert_eq!(chained, combined);
    }

    #[test]
    fn filter_keeps_input_order(xs in appointments(), search in search_term()) {
        let visible = filter(&xs, &apply_search(AppointmentQuery::new(), &search));
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| xs.iter().position(|x| x.id == v.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn distinct_values_has_no_duplicates(xs in appointments()) {
        let kinds = distinct_values(&xs, |a: &Appointment| Some(a.kind.clone()));
        let unique: HashSet<_> = kinds.iter().collect();
        prop_assert_eq!(unique.len(), kinds.len());
        prop_assert!(kinds.len() <= xs.len());

        // Notes are never set here, so every value is blank
        prop_assert!(distinct_values(&xs, |a: &Appointment| Some(a.notes.clone())).is_empty());

        let names = doctor_name_options(&xs);
        prop_assert!(names.iter().all(|n| !n.trim().is_empty()));
        prop_assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
    }

    #[test]
    fn status_counts_sum_to_total(xs in appointments()) {
        let counts = count_by_status(&xs);
        prop_assert_eq!(counts.values().sum::<usize>(), xs.len());
        prop_assert!(counts.values().all(|c| *c > 0));
    }

    #[test]
    fn latest_is_first_seen(xs in appointments()) {
        let latest = latest_appointment_by_patient(&xs);
        for (patient_id, appointment) in &latest {
            let first = xs.iter().find(|a| &a.patient_id == patient_id);
            prop_assert_eq!(appointment.map(|a| &a.id), first.map(|a| &a.id));
        }
        let patients: HashSet<_> = xs.iter().map(|a| &a.patient_id).collect();
        prop_assert_eq!(latest.len(), patients.len());
    }

    #[test]
    fn terminal_status_absorbs(
        from in prop::sample::select(vec![
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Rejected,
        ]),
        to in status(),
        base in appointment(0),
    ) {
        let mut appointment = base;
        appointment.status = from;
        let before = appointment.clone();
        prop_assert!(transition(&appointment, to).is_err());
        prop_assert_eq!(appointment, before);
    }

    #[test]
    fn open_transition_to_same_status_is_identity(
        status in status().prop_filter("open", |s| !s.is_terminal()),
        base in appointment(0),
    ) {
        let mut appointment = base;
        appointment.status = status;
        let after = transition(&appointment, status).unwrap();
        prop_assert_eq!(after, appointment);
    }

    #[test]
    fn open_transition_changes_only_status(
        from in status().prop_filter("open", |s| !s.is_terminal()),
        to in status(),
        base in appointment(0),
    ) {
        let mut appointment = base;
        appointment.status = from;
        let after = transition(&appointment, to).unwrap();
        prop_assert_eq!(after.status, to);
        prop_assert_eq!(after.id, appointment.id);
        prop_assert_eq!(after.patient, appointment.patient);
        prop_assert_eq!(after.date, appointment.date);
    }
}
