//! Options command implementation
//!
//! Prints the distinct values of one field, the way a dropdown would
//! list them: first-seen order, no blanks, no duplicates.

use super::{load_failure_code, CommandContext};
use crate::core::diagnostics::TracingSink;
use crate::core::indexer;
use crate::core::snapshot::ClinicSnapshot;
use clap::{Args, ValueEnum};

/// Field whose values are listed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionField {
    /// Doctor names on appointments
    Doctor,
    /// Patient names on appointments
    Patient,
    /// Appointment statuses
    Status,
    /// Appointment types
    Type,
    /// Appointment dates
    Date,
    /// Doctor specializations
    Specialization,
    /// Patient genders
    Gender,
}

/// Arguments for the options command
#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Field to list distinct values for
    #[arg(value_enum)]
    pub field: OptionField,
}

impl OptionsArgs {
    /// Execute the options command
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<i32> {
        tracing::info!(field = ?self.field, "Listing option values");

        let mut sink = TracingSink::new();
        let snapshot = match ctx.load_snapshot(&mut sink).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ Failed to load snapshot: {e}");
                return Ok(load_failure_code(&e));
            }
        };

        let values = option_values(&snapshot, self.field);
        ctx.emit(&values, &["value"], || {
            values.iter().map(|v| vec![v.clone()]).collect()
        })?;
        Ok(0)
    }
}

/// Display strings of the distinct values of `field`
pub fn option_values(snapshot: &ClinicSnapshot, field: OptionField) -> Vec<String> {
    let appointments = &snapshot.appointments;
    match field {
        OptionField::Doctor => indexer::doctor_name_options(appointments),
        OptionField::Patient => indexer::patient_name_options(appointments),
        OptionField::Status => indexer::status_options(appointments)
            .into_iter()
            .map(|s| s.as_str().to_string())
            .collect(),
        OptionField::Type => indexer::appointment_type_options(appointments),
        OptionField::Date => indexer::appointment_date_options(appointments)
            .into_iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect(),
        OptionField::Specialization => indexer::specialization_options(&snapshot.doctors)
            .into_iter()
            .map(|s| s.name().to_string())
            .collect(),
        OptionField::Gender => indexer::gender_options(&snapshot.patients)
            .into_iter()
            .map(|g| g.as_str().to_string())
            .collect(),
    }
}
