//! Filter command implementation
//!
//! Runs a search plus exact-match query over one collection and prints the
//! visible records in input order.

use super::{load_failure_code, CommandContext};
use crate::core::diagnostics::{Diagnostics, NullSink};
use crate::core::query::{
    filter_reporting, AppointmentQuery, DoctorQuery, PatientQuery, RecordQuery,
};
use crate::core::snapshot::ClinicSnapshot;
use crate::domain::{AppointmentStatus, Gender, Specialization};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

/// Collection to filter
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Appointments,
    Patients,
    Doctors,
    Medicines,
}

/// Arguments for the filter command
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Collection to filter
    #[arg(value_enum)]
    pub collection: Option<Collection>,

    /// Case-insensitive substring matched against the searchable fields
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact doctor name (appointments)
    #[arg(long)]
    pub doctor: Option<String>,

    /// Exact patient name (appointments)
    #[arg(long)]
    pub patient: Option<String>,

    /// Appointment status, e.g. "pending" or "on hold"
    #[arg(long)]
    pub status: Option<AppointmentStatus>,

    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Exact appointment type
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Patient gender (patients)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Doctor specialization (doctors)
    #[arg(long)]
    pub specialization: Option<Specialization>,
}

impl FilterArgs {
    /// Execute the filter command
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<i32> {
        let collection = self.collection.unwrap_or(Collection::Appointments);
        tracing::info!(collection = ?collection, search = ?self.search, "Filtering records");

        // Gaps are reported while filtering, not twice
        let snapshot = match ctx.load_snapshot(&mut NullSink).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ Failed to load snapshot: {e}");
                return Ok(load_failure_code(&e));
            }
        };

        let mut sink = Diagnostics::new();
        let visible = self.run(&snapshot, collection, &mut sink);
        sink.log();
        if !sink.is_empty() {
            eprintln!("⚠️  {} unresolved reference(s), see log", sink.len());
        }

        let (headers, rows) = visible.table();
        ctx.emit(&visible, &headers, || rows)?;
        Ok(0)
    }

    fn appointment_query(&self) -> AppointmentQuery {
        let mut query = AppointmentQuery::new();
        if let Some(search) = &self.search {
            query = query.with_search(search);
        }
        if let Some(doctor) = &self.doctor {
            query = query.with_doctor(doctor);
        }
        if let Some(patient) = &self.patient {
            query = query.with_patient(patient);
        }
        if let Some(status) = self.status {
            query = query.with_status(status);
        }
        if let Some(date) = self.date {
            query = query.with_date(date);
        }
        if let Some(kind) = &self.kind {
            query = query.with_kind(kind);
        }
        query
    }

    fn patient_query(&self) -> PatientQuery {
        let mut query = PatientQuery::new();
        if let Some(search) = &self.search {
            query = query.with_search(search);
        }
        if let Some(gender) = self.gender {
            query = query.with_gender(gender);
        }
        query
    }

    fn doctor_query(&self) -> DoctorQuery {
        let mut query = DoctorQuery::new();
        if let Some(search) = &self.search {
            query = query.with_search(search);
        }
        if let Some(specialization) = self.specialization {
            query = query.with_specialization(specialization);
        }
        query
    }

    /// Applies the query matching `collection` to the snapshot
    pub fn run(
        &self,
        snapshot: &ClinicSnapshot,
        collection: Collection,
        sink: &mut Diagnostics,
    ) -> FilterOutput {
        match collection {
            Collection::Appointments => FilterOutput::Appointments(filter_reporting(
                &snapshot.appointments,
                &self.appointment_query(),
                sink,
            )),
            Collection::Patients => FilterOutput::Patients(filter_reporting(
                &snapshot.patients,
                &self.patient_query(),
                sink,
            )),
            Collection::Doctors => FilterOutput::Doctors(filter_reporting(
                &snapshot.doctors,
                &self.doctor_query(),
                sink,
            )),
            Collection::Medicines => {
                let query = RecordQuery::new(self.search.clone().unwrap_or_default());
                FilterOutput::Medicines(filter_reporting(&snapshot.medicines, &query, sink))
            }
        }
    }
}

/// Visible records of one collection
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum FilterOutput {
    Appointments(Vec<crate::domain::Appointment>),
    Patients(Vec<crate::domain::Patient>),
    Doctors(Vec<crate::domain::Doctor>),
    Medicines(Vec<crate::domain::Medicine>),
}

impl FilterOutput {
    pub fn len(&self) -> usize {
        match self {
            Self::Appointments(v) => v.len(),
            Self::Patients(v) => v.len(),
            Self::Doctors(v) => v.len(),
            Self::Medicines(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        let missing = || "-".to_string();
        match self {
            Self::Appointments(items) => (
                vec!["id", "date", "time", "patient", "doctor", "type", "status"],
                items
                    .iter()
                    .map(|a| {
                        vec![
                            a.id.to_string(),
                            a.date.format("%Y-%m-%d").to_string(),
                            a.time.clone(),
                            a.patient_name().map(str::to_string).unwrap_or_else(missing),
                            a.doctor_name().map(str::to_string).unwrap_or_else(missing),
                            a.kind.clone(),
                            a.status.label().to_string(),
                        ]
                    })
                    .collect(),
            ),
            Self::Patients(items) => (
                vec!["id", "name", "email", "gender"],
                items
                    .iter()
                    .map(|p| {
                        vec![
                            p.id.to_string(),
                            p.name.clone(),
                            p.email.clone(),
                            p.gender.to_string(),
                        ]
                    })
                    .collect(),
            ),
            Self::Doctors(items) => (
                vec!["id", "name", "specialization", "email"],
                items
                    .iter()
                    .map(|d| {
                        vec![
                            d.id.to_string(),
                            d.name.clone(),
                            d.specialization.name().to_string(),
                            d.email.clone(),
                        ]
                    })
                    .collect(),
            ),
            Self::Medicines(items) => (
                vec!["id", "title", "uploaded"],
                items
                    .iter()
                    .map(|m| {
                        vec![
                            m.id.to_string(),
                            m.title.clone(),
                            m.uploaded.format("%Y-%m-%d").to_string(),
                        ]
                    })
                    .collect(),
            ),
        }
    }
}
