//! Configuration management for Clinicboard.
//!
//! The core library takes no configuration: it works on whatever snapshot it
//! is given. This module configures the command-line host around it.
//!
//! # Overview
//!
//! Clinicboard uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLINICBOARD_*` environment overrides
//! - Default values for every setting
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [snapshot]
//! path = "${CLINIC_DATA_DIR}/clinic.json"
//! validate_on_load = true
//! resolve_references = true
//!
//! [output]
//! format = "table"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clinicboard::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinicboard.toml")?;
//! println!("Snapshot: {}", config.snapshot.path);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, ClinicConfig, LoggingConfig, OutputConfig, OutputFormat, SnapshotConfig,
};
