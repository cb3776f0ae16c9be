//! CLI command implementations
//!
//! Commands share a [`CommandContext`]: the loaded configuration plus the
//! command-line overrides. Status messages go to stderr; results go to
//! stdout in the configured [`OutputFormat`].

pub mod check;
pub mod filter;
pub mod init;
pub mod options;
pub mod summary;
pub mod transition;
pub mod validate;

use crate::adapters::snapshot::{JsonFileSource, SnapshotSource};
use crate::config::{ClinicConfig, OutputFormat};
use crate::core::diagnostics::DiagnosticSink;
use crate::core::snapshot::ClinicSnapshot;
use crate::domain::{ClinicError, Result};
use serde::Serialize;

/// Exit code for a rejected domain operation (validation, transition, integrity)
pub const EXIT_DOMAIN_FAILURE: i32 = 1;

/// Exit code for configuration problems
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for a snapshot that failed to load
///
/// Records rejected by validation are a domain failure; anything else
/// (missing file, malformed JSON) points at the configuration.
pub fn load_failure_code(err: &ClinicError) -> i32 {
    match err {
        ClinicError::Validation(_) => EXIT_DOMAIN_FAILURE,
        _ => EXIT_CONFIG_ERROR,
    }
}

/// Configuration and output settings for one command run
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: ClinicConfig,
}

impl CommandContext {
    /// Applies command-line overrides on top of the loaded configuration
    pub fn new(
        mut config: ClinicConfig,
        snapshot: Option<&str>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(path) = snapshot {
            config.snapshot.path = path.to_string();
        }
        if let Some(format) = format {
            config.output.format = format;
        }
        Self { config }
    }

    pub fn source(&self) -> JsonFileSource {
        JsonFileSource::new(&self.config.snapshot.path)
            .with_validation(self.config.snapshot.validate_on_load)
    }

    /// Loads the snapshot, resolving references when configured
    pub async fn load_snapshot(&self, sink: &mut dyn DiagnosticSink) -> Result<ClinicSnapshot> {
        let source = self.source();
        tracing::info!(source = %source.describe(), "Loading snapshot");
        let snapshot = source.load().await?;
        if self.config.snapshot.resolve_references {
            Ok(snapshot.with_resolved_references(sink))
        } else {
            Ok(snapshot)
        }
    }

    /// Writes `value` to stdout as JSON, or as a table built by `rows`
    pub fn emit<T, F>(&self, value: &T, headers: &[&str], rows: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: FnOnce() -> Vec<Vec<String>>,
    {
        match self.config.output.format {
            OutputFormat::Json => {
                let text = if self.config.output.pretty {
                    serde_json::to_string_pretty(value)?
                } else {
                    serde_json::to_string(value)?
                };
                println!("{text}");
            }
            OutputFormat::Table => {
                print!("{}", render_table(headers, &rows()));
            }
        }
        Ok(())
    }
}

/// Left-aligned text table with one space-padded column per header
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = format_row(headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    out.push_str(&format_row(&rule, &widths));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_row(&cells, &widths));
    }
    out
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}
