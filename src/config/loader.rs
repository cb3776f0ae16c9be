//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ClinicConfig;
use crate::domain::errors::ClinicError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ClinicConfig
/// 4. Applies environment variable overrides (CLINICBOARD_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use clinicboard::config::loader::load_config;
///
/// let config = load_config("clinicboard.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClinicConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClinicError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClinicError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ClinicConfig = toml::from_str(&contents)
        .map_err(|e| ClinicError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ClinicError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads the file when present, otherwise defaults with overrides applied
///
/// The CLI works without a configuration file; a file that exists but is
/// broken is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ClinicConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = ClinicConfig::default();
    apply_env_overrides(&mut config);
    config.validate().map_err(|e| {
        ClinicError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClinicError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ClinicError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the CLINICBOARD_* prefix
///
/// Variables follow the pattern CLINICBOARD_<SECTION>_<KEY>, for example
/// CLINICBOARD_SNAPSHOT_PATH. Unparseable values are ignored.
fn apply_env_overrides(config: &mut ClinicConfig) {
    if let Ok(val) = std::env::var("CLINICBOARD_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("CLINICBOARD_SNAPSHOT_PATH") {
        config.snapshot.path = val;
    }
    if let Ok(val) = std::env::var("CLINICBOARD_SNAPSHOT_VALIDATE_ON_LOAD") {
        if let Ok(flag) = val.parse() {
            config.snapshot.validate_on_load = flag;
        }
    }
    if let Ok(val) = std::env::var("CLINICBOARD_SNAPSHOT_RESOLVE_REFERENCES") {
        if let Ok(flag) = val.parse() {
            config.snapshot.resolve_references = flag;
        }
    }

    if let Ok(val) = std::env::var("CLINICBOARD_OUTPUT_FORMAT") {
        if let Ok(format) = val.parse() {
            config.output.format = format;
        }
    }

    if let Ok(val) = std::env::var("CLINICBOARD_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CLINICBOARD_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
