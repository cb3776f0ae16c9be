//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Clinicboard using clap.

pub mod commands;

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Clinicboard - clinic dashboard queries over a records snapshot
#[derive(Parser, Debug)]
#[command(name = "clinicboard")]
#[command(version, about, long_about = None)]
#[command(author = "Clinicboard Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "clinicboard.toml", env = "CLINICBOARD_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINICBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Snapshot file, overriding snapshot.path
    #[arg(long, global = true)]
    pub snapshot: Option<String>,

    /// Output format (json, table), overriding output.format
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the distinct values of a field
    Options(commands::options::OptionsArgs),

    /// Search and filter a collection
    Filter(commands::filter::FilterArgs),

    /// Show dashboard totals and aggregations
    Summary(commands::summary::SummaryArgs),

    /// Validate an appointment status change
    Transition(commands::transition::TransitionArgs),

    /// Check snapshot integrity
    Check(commands::check::CheckArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
