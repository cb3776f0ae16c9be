//! Transition command implementation
//!
//! Validates a status change for one appointment and prints the proposed
//! record. Nothing is written back: persisting it is the caller's job.

use super::{load_failure_code, CommandContext, EXIT_DOMAIN_FAILURE};
use crate::core::diagnostics::TracingSink;
use crate::core::snapshot::ClinicSnapshot;
use crate::domain::{
    Appointment, AppointmentId, AppointmentStatus, ClinicError, InvalidTransitionError,
};
use clap::Args;

/// Arguments for the transition command
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Appointment id
    pub id: AppointmentId,

    /// Target status, e.g. "confirmed" or "on hold"
    pub status: String,
}

impl TransitionArgs {
    /// Execute the transition command
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<i32> {
        tracing::info!(appointment_id = %self.id, to = %self.status, "Requesting status transition");

        let mut sink = TracingSink::new();
        let snapshot = match ctx.load_snapshot(&mut sink).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ Failed to load snapshot: {e}");
                return Ok(load_failure_code(&e));
            }
        };

        match self.apply(&snapshot) {
            Ok(proposed) => {
                eprintln!("✅ {} -> {}", self.id, proposed.status.label());
                ctx.emit(&proposed, &["id", "status"], || {
                    vec![vec![proposed.id.to_string(), proposed.status.label().to_string()]]
                })?;
                Ok(0)
            }
            Err(e) => {
                tracing::warn!(appointment_id = %self.id, error = %e, "Transition rejected");
                eprintln!("❌ {e}");
                if let ClinicError::InvalidTransition(InvalidTransitionError::FromTerminal {
                    from,
                    ..
                }) = &e
                {
                    eprintln!("   '{}' is terminal and cannot change", from.label());
                }
                Ok(EXIT_DOMAIN_FAILURE)
            }
        }
    }

    /// The proposed appointment; `snapshot` is left as is
    pub fn apply(&self, snapshot: &ClinicSnapshot) -> crate::domain::Result<Appointment> {
        let to: AppointmentStatus = self
            .status
            .parse()
            .map_err(|_| InvalidTransitionError::UnknownStatus(self.status.clone()))?;
        snapshot.apply_transition(&self.id, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DoctorId, PatientId};
    use chrono::NaiveDate;

    fn snapshot(status: AppointmentStatus) -> ClinicSnapshot {
        let appointment = Appointment::builder()
            .id(AppointmentId::new("1").unwrap())
            .patient_id(PatientId::new("P1").unwrap())
            .doctor_id(DoctorId::new("D1").unwrap())
            .date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
            .time("09:30 AM")
            .kind("Consultation")
            .status(status)
            .build()
            .unwrap();
        ClinicSnapshot::new(vec![], vec![], vec![appointment])
    }

    fn args(id: &str, status: &str) -> TransitionArgs {
        TransitionArgs {
            id: AppointmentId::new(id).unwrap(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_apply_accepts_open_status() {
        let proposed = args("1", "on hold")
            .apply(&snapshot(AppointmentStatus::Pending))
            .unwrap();
        assert_eq!(proposed.status, AppointmentStatus::OnHold);
    }

    #[test]
    fn test_apply_rejects_terminal_status() {
        let err = args("1", "pending")
            .apply(&snapshot(AppointmentStatus::Cancelled))
            .unwrap_err();
        assert!(matches!(
            err,
            ClinicError::InvalidTransition(InvalidTransitionError::FromTerminal { .. })
        ));
    }

    #[test]
    fn test_apply_unknown_status() {
        let err = args("1", "teleported")
            .apply(&snapshot(AppointmentStatus::Pending))
            .unwrap_err();
        assert!(matches!(
            err,
            ClinicError::InvalidTransition(InvalidTransitionError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_apply_matches_snapshot_transition() {
        let snap = snapshot(AppointmentStatus::Confirmed);
        let proposed = args("1", "in transit").apply(&snap).unwrap();
        let direct = snap
            .apply_transition(&AppointmentId::new("1").unwrap(), AppointmentStatus::InTransit)
            .unwrap();
        assert_eq!(proposed, direct);
        assert_eq!(snap.appointments[0].status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_apply_unknown_appointment() {
        let err = args("42", "confirmed")
            .apply(&snapshot(AppointmentStatus::Pending))
            .unwrap_err();
        assert!(matches!(err, ClinicError::Snapshot(_)));
    }
}
