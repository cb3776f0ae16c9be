//! Summary command implementation
//!
//! Prints the dashboard headline numbers and, on request, the per-patient
//! and per-doctor aggregations behind them.

use super::{load_failure_code, CommandContext};
use crate::core::aggregate::{
    self, by_doctor_id, by_doctor_name, DashboardSummary, VisitStats,
};
use crate::core::diagnostics::{Diagnostics, NullSink};
use crate::core::snapshot::ClinicSnapshot;
use crate::domain::{AppointmentId, AppointmentStatus, DoctorId, PatientId, PatientSummary};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;

/// Arguments for the summary command
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Include the patient roster of the doctor with this exact name
    #[arg(long, conflicts_with = "doctor_id")]
    pub doctor: Option<String>,

    /// Include the patient roster of the doctor with this id
    #[arg(long)]
    pub doctor_id: Option<DoctorId>,

    /// Include the latest appointment of every patient
    #[arg(long)]
    pub latest: bool,

    /// Include per-patient visit counters and per-doctor patient counts
    #[arg(long)]
    pub visits: bool,
}

/// Latest appointment of one patient, as printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestEntry {
    pub id: AppointmentId,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
}

/// Everything the summary command prints
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    #[serde(flatten)]
    pub dashboard: DashboardSummary,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<Vec<PatientSummary>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<BTreeMap<PatientId, Option<LatestEntry>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits: Option<BTreeMap<PatientId, VisitStats>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_counts: Option<BTreeMap<DoctorId, usize>>,
}

impl SummaryArgs {
    /// Execute the summary command
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<i32> {
        tracing::info!("Computing dashboard summary");

        // Gaps are reported by the aggregations below
        let snapshot = match ctx.load_snapshot(&mut NullSink).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ Failed to load snapshot: {e}");
                return Ok(load_failure_code(&e));
            }
        };

        let mut sink = Diagnostics::new();
        let report = self.build(&snapshot, &mut sink);
        report.dashboard.log_summary();
        sink.log();

        ctx.emit(&report, &["metric", "value"], || report.rows())?;
        Ok(0)
    }

    /// Builds the report for `snapshot`
    pub fn build(&self, snapshot: &ClinicSnapshot, sink: &mut Diagnostics) -> SummaryReport {
        let appointments = &snapshot.appointments;

        let roster = match (&self.doctor, &self.doctor_id) {
            (Some(name), _) => Some(aggregate::roster_for_doctor_reporting(
                appointments,
                by_doctor_name(name),
                sink,
            )),
            (None, Some(id)) => Some(aggregate::roster_for_doctor_reporting(
                appointments,
                by_doctor_id(id),
                sink,
            )),
            (None, None) => None,
        };

        let latest = self.latest.then(|| {
            aggregate::latest_appointment_for_patients_reporting(
                &snapshot.patients,
                appointments,
                &mut *sink,
            )
            .into_iter()
            .map(|(patient_id, appointment)| {
                let entry = appointment.map(|a| LatestEntry {
                    id: a.id.clone(),
                    date: a.date,
                    time: a.time.clone(),
                    status: a.status,
                });
                (patient_id, entry)
            })
            .collect()
        });

        // One pass reports the per-appointment gaps; skip it when `latest` did
        let visits = self.visits.then(|| {
            if self.latest {
                aggregate::visit_stats_by_patient(appointments)
            } else {
                aggregate::visit_stats_by_patient_reporting(appointments, &mut *sink)
            }
        });

        SummaryReport {
            dashboard: snapshot.summary(),
            roster,
            latest,
            visits,
            patient_counts: self
                .visits
                .then(|| aggregate::patient_count_by_doctor(appointments)),
        }
    }
}

impl SummaryReport {
    fn rows(&self) -> Vec<Vec<String>> {
        let d = &self.dashboard;
        let mut rows = vec![
            vec!["patients".to_string(), d.total_patients.to_string()],
            vec!["doctors".to_string(), d.total_doctors.to_string()],
            vec!["appointments".to_string(), d.total_appointments.to_string()],
            vec!["open".to_string(), d.open_appointments.to_string()],
            vec!["unresolved".to_string(), d.unresolved_appointments.to_string()],
        ];
        for (status, count) in &d.by_status {
            rows.push(vec![format!("status:{}", status.as_str()), count.to_string()]);
        }
        if let Some(roster) = &self.roster {
            for patient in roster {
                rows.push(vec!["roster".to_string(), patient.name.clone()]);
            }
        }
        if let Some(latest) = &self.latest {
            for (patient_id, entry) in latest {
                let value = entry
                    .as_ref()
                    .map(|e| format!("{} {} ({})", e.date.format("%Y-%m-%d"), e.time, e.status))
                    .unwrap_or_else(|| "-".to_string());
                rows.push(vec![format!("latest:{patient_id}"), value]);
            }
        }
        if let Some(visits) = &self.visits {
            for (patient_id, stats) in visits {
                rows.push(vec![
                    format!("visits:{patient_id}"),
                    format!("{} total, {} completed, {} open", stats.total, stats.completed, stats.open),
                ]);
            }
        }
        if let Some(counts) = &self.patient_counts {
            for (doctor_id, count) in counts {
                rows.push(vec![format!("patients:{doctor_id}"), count.to_string()]);
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Appointment, DoctorSummary, Gender, Patient};

    fn appointment(id: &str, patient: &str, doctor: &str, status: AppointmentStatus) -> Appointment {
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

    fn snapshot() -> ClinicSnapshot {
        let patient = |id: &str| {
            Patient::builder()
                .id(PatientId::new(id).unwrap())
                .name(id)
                .email(format!("{id}@x.com"))
                .gender(Gender::Other)
                .build()
                .unwrap()
        };
        ClinicSnapshot::new(
            vec![patient("P1"), patient("P2"), patient("P3")],
            vec![],
            vec![
                appointment("a1", "P1", "D1", AppointmentStatus::Pending),
                appointment("a2", "P2", "D1", AppointmentStatus::Completed),
                appointment("a3", "P1", "D1", AppointmentStatus::Completed),
            ],
        )
    }

    #[test]
    fn test_summary_defaults_to_headline_numbers() {
        let report = SummaryArgs::default().build(&snapshot(), &mut Diagnostics::new());
        assert_eq!(report.dashboard.total_appointments, 3);
        assert_eq!(report.dashboard.open_appointments, 1);
        assert!(report.roster.is_none());
        assert!(report.latest.is_none());
    }

    #[test]
    fn test_summary_roster_and_latest() {
        let args = SummaryArgs {
            doctor: Some("D1".to_string()),
            latest: true,
            ..Default::default()
        };
        let report = args.build(&snapshot(), &mut Diagnostics::new());

        let roster = report.roster.unwrap();
        let names: Vec<_> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2"]);

        let latest = report.latest.unwrap();
        let p1 = PatientId::new("P1").unwrap();
        let p3 = PatientId::new("P3").unwrap();
        assert_eq!(latest[&p1].as_ref().unwrap().id.as_str(), "a1");
        assert!(latest[&p3].is_none());
    }

    #[test]
    fn test_summary_visits() {
        let args = SummaryArgs {
            visits: true,
            ..Default::default()
        };
        let report = args.build(&snapshot(), &mut Diagnostics::new());
        let p1 = PatientId::new("P1").unwrap();
        assert_eq!(report.visits.unwrap()[&p1].total, 2);
        let d1 = DoctorId::new("D1").unwrap();
        assert_eq!(report.patient_counts.unwrap()[&d1], 2);
    }

    #[test]
    fn test_summary_reports_unknown_patients() {
        let mut snap = snapshot();
        snap.appointments
            .push(appointment("a4", "GHOST", "D1", AppointmentStatus::Pending));

        let args = SummaryArgs {
            latest: true,
            visits: true,
            ..Default::default()
        };
        let mut sink = Diagnostics::new();
        let report = args.build(&snap, &mut sink);

        assert!(report.latest.unwrap().contains_key(&PatientId::new("GHOST").unwrap()));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.issues()[0].appointment_id().as_str(), "a4");
    }

    #[test]
    fn test_summary_serializes_flat() {
        let report = SummaryArgs::default().build(&snapshot(), &mut Diagnostics::new());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total_appointments"], 3);
        assert!(value.get("roster").is_none());
    }
}
