//! Appointment status machine
//!
//! Terminal statuses (`completed`, `cancelled`, `rejected`) are absorbing.
//! Every other move between statuses is allowed, including moving to the
//! status the appointment already has. The machine only validates and
//! returns the proposed value: persisting it and updating patient or doctor
//! counters belong to the caller.

use crate::domain::{Appointment, AppointmentStatus, InvalidTransitionError};

/// Whether `from -> to` is permitted
pub fn can_transition(from: AppointmentStatus, _to: AppointmentStatus) -> bool {
    !from.is_terminal()
}

/// Every status reachable from `from`
pub fn allowed_targets(from: AppointmentStatus) -> Vec<AppointmentStatus> {
    AppointmentStatus::ALL
        .into_iter()
        .filter(|to| can_transition(from, *to))
        .collect()
}

/// Applies a status change, returning the updated appointment
///
/// The input is never modified. Only `status` differs between input and output.
///
/// # Errors
///
/// [`InvalidTransitionError::FromTerminal`] when the appointment is already
/// completed, cancelled or rejected.
///
/// # Examples
///
/// ```
/// use clinicboard::core::status::transition;
/// use clinicboard::domain::{Appointment, AppointmentStatus, AppointmentId, DoctorId, PatientId};
/// use chrono::NaiveDate;
///
/// let appointment = Appointment::builder()
///     .id(AppointmentId::new("1").unwrap())
///     .patient_id(PatientId::new("P1").unwrap())
///     .doctor_id(DoctorId::new("D1").unwrap())
///     .date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
///     .time("09:30 AM")
///     .kind("Consultation")
///     .status(AppointmentStatus::Rejected)
///     .build()
///     .unwrap();
///
/// assert!(transition(&appointment, AppointmentStatus::Pending).is_err());
/// assert_eq!(appointment.status, AppointmentStatus::Rejected);
/// ```
pub fn transition(
    appointment: &Appointment,
    to: AppointmentStatus,
) -> Result<Appointment, InvalidTransitionError> {
    let from = appointment.status;
    if !can_transition(from, to) {
        return Err(InvalidTransitionError::FromTerminal {
            appointment_id: appointment.id.clone(),
            from,
            to,
        });
    }
    crate::log_status_transition!(&appointment.id, from, to);
    Ok(appointment.with_status(to))
}

/// Like [`transition`], parsing the target status first
///
/// # Errors
///
/// [`InvalidTransitionError::UnknownStatus`] when `to` names no status,
/// otherwise as [`transition`].
pub fn transition_str(
    appointment: &Appointment,
    to: &str,
) -> Result<Appointment, InvalidTransitionError> {
    let to: AppointmentStatus = to
        .parse()
        .map_err(|_| InvalidTransitionError::UnknownStatus(to.to_string()))?;
    transition(appointment, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppointmentId, DoctorId, PatientId};
    use chrono::NaiveDate;
    use test_case::test_case;

    fn appointment(status: AppointmentStatus) -> Appointment {
        Appointment::builder()
            .id(AppointmentId::new("1").unwrap())
            .patient_id(PatientId::new("P1").unwrap())
            .doctor_id(DoctorId::new("D1").unwrap())
            .date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
            .time("09:30 AM")
            .kind("Consultation")
            .status(status)
            .notes("bring previous scans")
            .build()
            .unwrap()
    }

    #[test]
    fn test_transition_changes_only_status() {
        let before = appointment(AppointmentStatus::Pending);
        let after = transition(&before, AppointmentStatus::Confirmed).unwrap();
        assert_eq!(after.status, AppointmentStatus::Confirmed);
        assert_eq!(after.notes, before.notes);
        assert_eq!(after.with_status(before.status), before);
        assert_eq!(before.status, AppointmentStatus::Pending);
    }

    #[test]
    fn test_same_status_is_not_an_error() {
        let a = appointment(AppointmentStatus::Scheduled);
        assert_eq!(transition(&a, AppointmentStatus::Scheduled).unwrap(), a);
    }

    #[test_case(AppointmentStatus::Completed)]
    #[test_case(AppointmentStatus::Cancelled)]
    #[test_case(AppointmentStatus::Rejected)]
    fn test_terminal_states_absorb(terminal: AppointmentStatus) {
        let a = appointment(terminal);
        for target in AppointmentStatus::ALL {
            let err = transition(&a, target).unwrap_err();
            assert!(matches!(err, InvalidTransitionError::FromTerminal { .. }));
        }
        assert!(allowed_targets(terminal).is_empty());
    }

    #[test]
    fn test_non_terminal_reaches_everything() {
        assert_eq!(
            allowed_targets(AppointmentStatus::OnHold).len(),
            AppointmentStatus::ALL.len()
        );
    }

    #[test]
    fn test_transition_str() {
        let a = appointment(AppointmentStatus::Processing);
        let moved = transition_str(&a, "in transit").unwrap();
        assert_eq!(moved.status, AppointmentStatus::InTransit);

        let err = transition_str(&a, "teleported").unwrap_err();
        assert_eq!(err, InvalidTransitionError::UnknownStatus("teleported".to_string()));
    }

    #[test]
    fn test_rejected_to_pending_leaves_input_unchanged() {
        let a = appointment(AppointmentStatus::Rejected);
        let before = a.clone();
        assert!(transition_str(&a, "pending").is_err());
        assert_eq!(a, before);
    }
}
