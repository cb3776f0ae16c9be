//! Result type alias for Clinicboard

use super::errors::ClinicError;

/// Result type alias for Clinicboard operations
///
/// # Examples
///
/// ```
/// use clinicboard::domain::result::Result;
/// use clinicboard::domain::errors::ClinicError;
///
/// fn load() -> Result<String> {
///     Ok("snapshot".to_string())
/// }
///
/// fn failing() -> Result<()> {
///     Err(ClinicError::Snapshot("empty".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ClinicError>;
