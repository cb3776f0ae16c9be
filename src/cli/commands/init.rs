//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::EXIT_CONFIG_ERROR;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clinicboard.toml")]
    pub output: String,

    /// Include comments explaining every setting
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Clinicboard configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point snapshot.path at your clinic export");
                println!("  2. Validate configuration: clinicboard validate-config");
                println!("  3. Check the data: clinicboard check");
                println!("  4. Show the dashboard: clinicboard summary");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn generate_minimal_config() -> &'static str {
        r#"# Clinicboard Configuration File

[application]
log_level = "info"

[snapshot]
path = "clinic.json"
validate_on_load = true
resolve_references = true

[output]
format = "json"
pretty = false

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
    }

    fn generate_config_with_examples() -> &'static str {
        r#"# Clinicboard Configuration File
#
# Every value below is the default. Values may reference environment
# variables with ${VAR_NAME}, and any key can be overridden with
# CLINICBOARD_<SECTION>_<KEY>, e.g. CLINICBOARD_SNAPSHOT_PATH.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[snapshot]
# JSON export holding patients, doctors, appointments and medicines
path = "clinic.json"

# Reject the snapshot when any record fails structural validation
validate_on_load = true

# Refresh embedded patient/doctor summaries on appointments from the
# patient and doctor collections; dangling ids are logged
resolve_references = true

[output]
# json | table
format = "json"

# Pretty-print JSON output
pretty = false

[logging]
# Write JSON logs to files in addition to stderr
local_enabled = false
local_path = "./logs"

# daily | hourly | never
local_rotation = "daily"
"#
    }
}
