//! Aggregations for dashboard summary views
//!
//! Every function is a single pass over an appointment snapshot and returns
//! a freshly built value. Empty input yields empty output.

use crate::core::diagnostics::{DiagnosticSink, NullSink};
use crate::core::query::Searchable;
use crate::domain::{
    Appointment, AppointmentStatus, DoctorId, Doctor, Patient, PatientId, PatientSummary,
    ReferenceResolutionError,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Number of appointments per status; statuses that never occur are absent
pub fn count_by_status(appointments: &[Appointment]) -> BTreeMap<AppointmentStatus, usize> {
    let mut counts = BTreeMap::new();
    for appointment in appointments {
        *counts.entry(appointment.status).or_insert(0) += 1;
    }
    counts
}

/// For each patient present, the first appointment in input order
///
/// The API lists appointments newest first, so the first one seen is the
/// latest. Ties and ordering are taken from the input as is.
pub fn latest_appointment_by_patient(
    appointments: &[Appointment],
) -> BTreeMap<PatientId, Option<&Appointment>> {
    latest_appointment_by_patient_reporting(appointments, &mut NullSink)
}

/// Like [`latest_appointment_by_patient`], reporting unresolved references
pub fn latest_appointment_by_patient_reporting<'a>(
    appointments: &'a [Appointment],
    sink: &mut dyn DiagnosticSink,
) -> BTreeMap<PatientId, Option<&'a Appointment>> {
    let mut latest = BTreeMap::new();
    for appointment in appointments {
        report_gaps(appointment, sink);
        latest
            .entry(appointment.patient_id.clone())
            .or_insert(Some(appointment));
    }
    latest
}

/// Latest appointment for every known patient, `None` for patients without any
pub fn latest_appointment_for_patients<'a>(
    patients: &[Patient],
    appointments: &'a [Appointment],
) -> BTreeMap<PatientId, Option<&'a Appointment>> {
    latest_appointment_for_patients_reporting(patients, appointments, &mut NullSink)
}

/// Like [`latest_appointment_for_patients`], also reporting appointments
/// whose patient id is not among `patients`
pub fn latest_appointment_for_patients_reporting<'a>(
    patients: &[Patient],
    appointments: &'a [Appointment],
    sink: &mut dyn DiagnosticSink,
) -> BTreeMap<PatientId, Option<&'a Appointment>> {
    let mut latest: BTreeMap<PatientId, Option<&'a Appointment>> =
        patients.iter().map(|p| (p.id.clone(), None)).collect();
    for appointment in appointments {
        let known = latest.contains_key(&appointment.patient_id);
        // A missing summary is already reported as the same gap
        if !known && appointment.patient.is_some() {
            sink.report(ReferenceResolutionError::MissingPatient {
                appointment_id: appointment.id.clone(),
                patient_id: appointment.patient_id.clone(),
            });
        }
        report_gaps(appointment, sink);
        let slot = latest.entry(appointment.patient_id.clone()).or_insert(None);
        if slot.is_none() {
            *slot = Some(appointment);
        }
    }
    latest
}

fn report_gaps(appointment: &Appointment, sink: &mut dyn DiagnosticSink) {
    for gap in appointment.unresolved_references() {
        sink.report(gap);
    }
}

/// Deduplicated patients seen on the appointments selected by `selector`
///
/// Patients are rebuilt from the embedded summaries, deduplicated by patient
/// id, in first-seen order.
pub fn roster_for_doctor<F>(appointments: &[Appointment], selector: F) -> Vec<PatientSummary>
where
    F: Fn(&Appointment) -> bool,
{
    roster_for_doctor_reporting(appointments, selector, &mut NullSink)
}

/// Like [`roster_for_doctor`], reporting selected appointments without a patient
pub fn roster_for_doctor_reporting<F>(
    appointments: &[Appointment],
    selector: F,
    sink: &mut dyn DiagnosticSink,
) -> Vec<PatientSummary>
where
    F: Fn(&Appointment) -> bool,
{
    let mut seen = HashSet::new();
    let mut roster = Vec::new();
    for appointment in appointments {
        if !selector(appointment) {
            continue;
        }
        let Some(patient) = &appointment.patient else {
            sink.report(ReferenceResolutionError::MissingPatient {
                appointment_id: appointment.id.clone(),
                patient_id: appointment.patient_id.clone(),
            });
            continue;
        };
        if seen.insert(&appointment.patient_id) {
            roster.push(patient.clone());
        }
    }
    roster
}

/// Selects appointments whose embedded doctor has exactly this name
pub fn by_doctor_name(name: &str) -> impl Fn(&Appointment) -> bool + '_ {
    move |appointment: &Appointment| appointment.doctor_name() == Some(name)
}

/// Selects appointments referencing this doctor id
pub fn by_doctor_id(id: &DoctorId) -> impl Fn(&Appointment) -> bool + '_ {
    move |appointment: &Appointment| &appointment.doctor_id == id
}

/// Distinct patients per doctor id, the derived `patient_count`
pub fn patient_count_by_doctor(appointments: &[Appointment]) -> BTreeMap<DoctorId, usize> {
    patient_count_by_doctor_reporting(appointments, &mut NullSink)
}

/// Like [`patient_count_by_doctor`], reporting unresolved references
pub fn patient_count_by_doctor_reporting(
    appointments: &[Appointment],
    sink: &mut dyn DiagnosticSink,
) -> BTreeMap<DoctorId, usize> {
    let mut patients: BTreeMap<DoctorId, HashSet<&PatientId>> = BTreeMap::new();
    for appointment in appointments {
        report_gaps(appointment, sink);
        patients
            .entry(appointment.doctor_id.clone())
            .or_default()
            .insert(&appointment.patient_id);
    }
    patients
        .into_iter()
        .map(|(doctor_id, set)| (doctor_id, set.len()))
        .collect()
}

/// Appointment counters for one patient
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisitStats {
    /// All appointments
    pub total: usize,
    /// Appointments in `completed`
    pub completed: usize,
    /// Appointments not yet in a terminal status
    pub open: usize,
}

pub fn visit_stats_by_patient(appointments: &[Appointment]) -> BTreeMap<PatientId, VisitStats> {
    visit_stats_by_patient_reporting(appointments, &mut NullSink)
}

/// Like [`visit_stats_by_patient`], reporting unresolved references
pub fn visit_stats_by_patient_reporting(
    appointments: &[Appointment],
    sink: &mut dyn DiagnosticSink,
) -> BTreeMap<PatientId, VisitStats> {
    let mut stats: BTreeMap<PatientId, VisitStats> = BTreeMap::new();
    for appointment in appointments {
        report_gaps(appointment, sink);
        let entry = stats.entry(appointment.patient_id.clone()).or_default();
        entry.total += 1;
        if appointment.status == AppointmentStatus::Completed {
            entry.completed += 1;
        }
        if !appointment.status.is_terminal() {
            entry.open += 1;
        }
    }
    stats
}

/// Headline numbers for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub total_doctors: usize,
    pub total_appointments: usize,
    pub by_status: BTreeMap<AppointmentStatus, usize>,
    /// Appointments not yet in a terminal status
    pub open_appointments: usize,
    /// Appointments with a dangling patient or doctor reference
    pub unresolved_appointments: usize,
}

impl DashboardSummary {
    pub fn compute(patients: &[Patient], doctors: &[Doctor], appointments: &[Appointment]) -> Self {
        let by_status = count_by_status(appointments);
        let open_appointments = by_status
            .iter()
            .filter(|(status, _)| !status.is_terminal())
            .map(|(_, count)| count)
            .sum();
        let unresolved_appointments = appointments
            .iter()
            .filter(|a| !a.unresolved_references().is_empty())
            .count();

        Self {
            total_patients: patients.len(),
            total_doctors: doctors.len(),
            total_appointments: appointments.len(),
            by_status,
            open_appointments,
            unresolved_appointments,
        }
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_patients = self.total_patients,
            total_doctors = self.total_doctors,
            total_appointments = self.total_appointments,
            open_appointments = self.open_appointments,
            "Dashboard summary computed"
        );

        if self.unresolved_appointments > 0 {
            tracing::warn!(
                unresolved = self.unresolved_appointments,
                "Some appointments have unresolved references"
            );
        }
    }
}
