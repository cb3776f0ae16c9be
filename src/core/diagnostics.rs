//! Diagnostics channel for tolerated data-quality gaps
//!
//! Predicates and aggregations keep working when an appointment's patient
//! or doctor reference does not resolve. The gap is still reported: callers
//! pass a [`DiagnosticSink`] to the `*_reporting` variants to observe it.

use crate::domain::errors::ReferenceResolutionError;

/// Receiver of reference-resolution gaps
pub trait DiagnosticSink {
    /// Records one unresolved reference
    fn report(&mut self, issue: ReferenceResolutionError);
}

/// Sink that discards every report
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _issue: ReferenceResolutionError) {}
}

/// Collecting sink, keeps reports in arrival order
///
/// # Examples
///
/// ```
/// use clinicboard::core::diagnostics::{DiagnosticSink, Diagnostics};
/// use clinicboard::domain::{AppointmentId, PatientId, ReferenceResolutionError};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.report(ReferenceResolutionError::MissingPatient {
///     appointment_id: AppointmentId::new("1").unwrap(),
///     patient_id: PatientId::new("P9").unwrap(),
/// });
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    issues: Vec<ReferenceResolutionError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> &[ReferenceResolutionError] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_issues(self) -> Vec<ReferenceResolutionError> {
        self.issues
    }

    /// Emits every collected issue as a warning event
    pub fn log(&self) {
        for issue in &self.issues {
            crate::log_reference_gap!(issue);
        }
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, issue: ReferenceResolutionError) {
        self.issues.push(issue);
    }
}

/// Sink that forwards each report to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink {
    reported: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of issues forwarded so far
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, issue: ReferenceResolutionError) {
        self.reported += 1;
        crate::log_reference_gap!(&issue);
    }
}
