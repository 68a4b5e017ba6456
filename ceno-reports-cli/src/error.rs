//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or inaccessible
    FileNotFound(String),
    /// Vocabulary file could not be loaded
    ConfigError(String),
    /// Request could not be encoded
    EncodeError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::EncodeError(msg) => write!(f, "Invalid report request: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("reports.json".to_string());
        assert_eq!(error.to_string(), "File not found: reports.json");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("duplicate flag".to_string());
        assert_eq!(error.to_string(), "Configuration error: duplicate flag");
    }

    #[test]
    fn test_encode_error_display() {
        let error = CliError::EncodeError("No such error class bogusClass".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid report request: No such error class bogusClass"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("x.json".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("x.json"));
    }
}
