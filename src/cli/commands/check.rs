//! Check command implementation
//!
//! Validates every record and reports dangling references and duplicate
//! ids. Exits with 1 when the snapshot is not clean.

use super::{CommandContext, EXIT_CONFIG_ERROR, EXIT_DOMAIN_FAILURE};
use crate::core::diagnostics::{Diagnostics, NullSink};
use crate::core::snapshot::IntegrityReport;
use clap::Args;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {}

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<i32> {
        tracing::info!(path = %ctx.config.snapshot.path, "Checking snapshot integrity");

        // Load without resolving so dangling references are counted once
        let raw = CommandContext {
            config: {
                let mut config = ctx.config.clone();
                config.snapshot.resolve_references = false;
                config.snapshot.validate_on_load = false;
                config
            },
        };
        let snapshot = match raw.load_snapshot(&mut NullSink).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ Failed to load snapshot: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        if let Err(e) = snapshot.validate() {
            eprintln!("❌ Record validation failed: {e}");
            return Ok(EXIT_DOMAIN_FAILURE);
        }
        eprintln!("✅ All records are structurally valid");

        let mut diagnostics = Diagnostics::new();
        let report = snapshot.check_references(&mut diagnostics);
        diagnostics.log();

        for issue in diagnostics.issues() {
            eprintln!("   ⚠️  {issue}");
        }

        ctx.emit(&report, &["check", "result"], || rows(&report))?;

        if report.is_clean() {
            eprintln!("✅ Snapshot is consistent");
            Ok(0)
        } else {
            eprintln!("❌ Snapshot has integrity problems");
            Ok(EXIT_DOMAIN_FAILURE)
        }
    }
}

fn rows(report: &IntegrityReport) -> Vec<Vec<String>> {
    let join = |ids: Vec<String>| {
        if ids.is_empty() {
            "-".to_string()
        } else {
            ids.join(", ")
        }
    };
    vec![
        vec![
            "appointments checked".to_string(),
            report.appointments_checked.to_string(),
        ],
        vec![
            "dangling references".to_string(),
            report.dangling_references.to_string(),
        ],
        vec![
            "duplicate patient ids".to_string(),
            join(report.duplicate_patient_ids.iter().map(|id| id.to_string()).collect()),
        ],
        vec![
            "duplicate doctor ids".to_string(),
            join(report.duplicate_doctor_ids.iter().map(|id| id.to_string()).collect()),
        ],
        vec![
            "duplicate appointment ids".to_string(),
            join(report.duplicate_appointment_ids.iter().map(|id| id.to_string()).collect()),
        ],
    ]
}
