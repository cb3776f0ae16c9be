//! Clinic snapshot: one complete, immutable set of records
//!
//! The snapshot is what the persistence layer hands to the core. Nothing
//! here mutates it; operations return new values.

use crate::core::aggregate::DashboardSummary;
use crate::core::diagnostics::DiagnosticSink;
use crate::core::status;
use crate::domain::errors::ClinicError;
use crate::domain::result::Result;
use crate::domain::{
    Appointment, AppointmentId, AppointmentStatus, Doctor, DoctorId, Medicine, Patient, PatientId,
    ReferenceResolutionError, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Patients, doctors, appointments and the medicine catalog at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicSnapshot {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub medicines: Vec<Medicine>,
}

/// Outcome of a referential integrity check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    /// Appointments checked
    pub appointments_checked: usize,
    /// Dangling patient or doctor references
    pub dangling_references: usize,
    pub duplicate_patient_ids: Vec<PatientId>,
    pub duplicate_doctor_ids: Vec<DoctorId>,
    pub duplicate_appointment_ids: Vec<AppointmentId>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_references == 0
            && self.duplicate_patient_ids.is_empty()
            && self.duplicate_doctor_ids.is_empty()
            && self.duplicate_appointment_ids.is_empty()
    }
}

/// Ids that occur more than once, in first-repeat order
fn duplicates<'a, K, I>(ids: I) -> Vec<K>
where
    K: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a K>,
{
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for id in ids {
        if !seen.insert(id) && !repeated.contains(id) {
            repeated.push(id.clone());
        }
    }
    repeated
}

impl ClinicSnapshot {
    pub fn new(
        patients: Vec<Patient>,
        doctors: Vec<Doctor>,
        appointments: Vec<Appointment>,
    ) -> Self {
        Self {
            patients,
            doctors,
            appointments,
            medicines: Vec::new(),
        }
    }

    /// Structural validation of every record, stopping at the first failure
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for patient in &self.patients {
            patient.validate()?;
        }
        for doctor in &self.doctors {
            doctor.validate()?;
        }
        for appointment in &self.appointments {
            appointment.validate()?;
        }
        crate::domain::records::validate_unique_ids("medicines", &self.medicines)?;
        Ok(())
    }

    pub fn patient(&self, id: &PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.id == id)
    }

    pub fn doctor(&self, id: &DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| &d.id == id)
    }

    pub fn appointment(&self, id: &AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| &a.id == id)
    }

    /// Reports every appointment whose patient or doctor id is unknown
    pub fn check_references(&self, sink: &mut dyn DiagnosticSink) -> IntegrityReport {
        let patient_ids: HashSet<&PatientId> = self.patients.iter().map(|p| &p.id).collect();
        let doctor_ids: HashSet<&DoctorId> = self.doctors.iter().map(|d| &d.id).collect();

        let mut dangling = 0;
        for appointment in &self.appointments {
            if !patient_ids.contains(&appointment.patient_id) {
                dangling += 1;
                sink.report(ReferenceResolutionError::MissingPatient {
                    appointment_id: appointment.id.clone(),
                    patient_id: appointment.patient_id.clone(),
                });
            }
            if !doctor_ids.contains(&appointment.doctor_id) {
                dangling += 1;
                sink.report(ReferenceResolutionError::MissingDoctor {
                    appointment_id: appointment.id.clone(),
                    doctor_id: appointment.doctor_id.clone(),
                });
            }
        }

        IntegrityReport {
            appointments_checked: self.appointments.len(),
            dangling_references: dangling,
            duplicate_patient_ids: duplicates(self.patients.iter().map(|p| &p.id)),
            duplicate_doctor_ids: duplicates(self.doctors.iter().map(|d| &d.id)),
            duplicate_appointment_ids: duplicates(self.appointments.iter().map(|a| &a.id)),
        }
    }

    /// Appointments with embedded summaries refreshed from the collections
    ///
    /// A reference that does not resolve leaves the summary empty and is
    /// reported to `sink`. Input order is preserved.
    pub fn resolve_references(&self, sink: &mut dyn DiagnosticSink) -> Vec<Appointment> {
        let patients: HashMap<&PatientId, &Patient> =
            self.patients.iter().map(|p| (&p.id, p)).collect();
        let doctors: HashMap<&DoctorId, &Doctor> =
            self.doctors.iter().map(|d| (&d.id, d)).collect();

        self.appointments
            .iter()
            .map(|appointment| {
                let mut resolved = appointment.clone();
                resolved.patient = patients.get(&appointment.patient_id).map(|p| p.summary());
                resolved.doctor = doctors.get(&appointment.doctor_id).map(|d| d.summary());
                if resolved.patient.is_none() {
                    sink.report(ReferenceResolutionError::MissingPatient {
                        appointment_id: appointment.id.clone(),
                        patient_id: appointment.patient_id.clone(),
                    });
                }
                if resolved.doctor.is_none() {
                    sink.report(ReferenceResolutionError::MissingDoctor {
                        appointment_id: appointment.id.clone(),
                        doctor_id: appointment.doctor_id.clone(),
                    });
                }
                resolved
            })
            .collect()
    }

    /// Copy of this snapshot whose appointments carry resolved summaries
    pub fn with_resolved_references(&self, sink: &mut dyn DiagnosticSink) -> Self {
        Self {
            appointments: self.resolve_references(sink),
            ..self.clone()
        }
    }

    /// Proposed appointment after moving `id` to `to`; the snapshot is unchanged
    ///
    /// # Errors
    ///
    /// [`ClinicError::Snapshot`] when no appointment has this id, otherwise
    /// the status machine's [`InvalidTransitionError`](crate::domain::InvalidTransitionError).
    pub fn apply_transition(&self, id: &AppointmentId, to: AppointmentStatus) -> Result<Appointment> {
        let appointment = self
            .appointment(id)
            .ok_or_else(|| ClinicError::Snapshot(format!("Appointment not found: {id}")))?;
        Ok(status::transition(appointment, to)?)
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.patients, &self.doctors, &self.appointments)
    }
}
