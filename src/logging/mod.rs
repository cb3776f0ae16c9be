//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Console output with configurable level
//! - Optional JSON file output with rotation
//! - Macros for the recurring events of the core
//!
//! # Example
//!
//! ```no_run
//! use clinicboard::logging::init_logging;
//! use clinicboard::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Dashboard host started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of a filter pass
///
/// # Example
///
/// ```no_run
/// use clinicboard::log_filter_applied;
///
/// log_filter_applied!(120, 7);
/// ```
#[macro_export]
macro_rules! log_filter_applied {
    ($total:expr, $visible:expr) => {
        tracing::debug!(total = $total, visible = $visible, "Filter applied");
    };
}

/// Log an unresolved patient or doctor reference
///
/// # Example
///
/// ```no_run
/// use clinicboard::log_reference_gap;
/// use clinicboard::domain::{AppointmentId, DoctorId, ReferenceResolutionError};
///
/// let issue = ReferenceResolutionError::MissingDoctor {
///     appointment_id: AppointmentId::new("1").unwrap(),
///     doctor_id: DoctorId::new("D9").unwrap(),
/// };
/// log_reference_gap!(&issue);
/// ```
#[macro_export]
macro_rules! log_reference_gap {
    ($issue:expr) => {
        tracing::warn!(
            appointment_id = %$issue.appointment_id(),
            issue = %$issue,
            "Unresolved appointment reference"
        );
    };
}

/// Log an accepted status transition
///
/// # Example
///
/// ```no_run
/// use clinicboard::log_status_transition;
/// use clinicboard::domain::{AppointmentId, AppointmentStatus};
///
/// let id = AppointmentId::new("1").unwrap();
/// log_status_transition!(&id, AppointmentStatus::Pending, AppointmentStatus::Confirmed);
/// ```
#[macro_export]
macro_rules! log_status_transition {
    ($appointment_id:expr, $from:expr, $to:expr) => {
        tracing::debug!(
            appointment_id = %$appointment_id,
            from = %$from,
            to = %$to,
            "Appointment status transition"
        );
    };
}
