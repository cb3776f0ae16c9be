// Clinicboard - Clinic Dashboard Query Tool
// Copyright (c) 2025 Clinicboard Contributors
// Licensed under the MIT License

use clinicboard::cli::commands::{CommandContext, EXIT_CONFIG_ERROR};
use clinicboard::cli::{Cli, Commands};
use clinicboard::config::{load_config_or_default, ClinicConfig, LoggingConfig};
use clinicboard::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // A broken config file still gets console logging so the error is visible
    let config = load_config_or_default(&cli.config);
    let (log_level, logging_config) = match &config {
        Ok(c) => (
            cli.log_level.clone().unwrap_or_else(|| c.application.log_level.clone()),
            c.logging.clone(),
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };
    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Clinicboard - Clinic Dashboard Query Tool"
    );

    let exit_code = match execute_command(&cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(
    cli: &Cli,
    config: clinicboard::domain::Result<ClinicConfig>,
) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::ValidateConfig(args) => return args.execute(&cli.config).await,
        Commands::Init(args) => return args.execute().await,
        _ => {}
    }

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error");
            eprintln!("❌ {e}");
            return Ok(EXIT_CONFIG_ERROR);
        }
    };
    let ctx = CommandContext::new(config, cli.snapshot.as_deref(), cli.format);

    match &cli.command {
        Commands::Options(args) => args.execute(&ctx).await,
        Commands::Filter(args) => args.execute(&ctx).await,
        Commands::Summary(args) => args.execute(&ctx).await,
        Commands::Transition(args) => args.execute(&ctx).await,
        Commands::Check(args) => args.execute(&ctx).await,
        Commands::ValidateConfig(_) | Commands::Init(_) => Ok(0),
    }
}
