//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// A CSV row could not be parsed
    MalformedCsv {
        /// File being read
        path: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the row
        reason: String,
    },
    /// Reduction rejected the workload
    ReductionError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MalformedCsv { path, line, reason } => {
                write!(f, "Malformed CSV in {path} at line {line}: {reason}")
            }
            CliError::ReductionError(msg) => write!(f, "Reduction error: {msg}"),
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
        let error = CliError::FileNotFound("forest.csv".to_string());
        assert_eq!(error.to_string(), "File not found: forest.csv");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_malformed_csv_display() {
        let error = CliError::MalformedCsv {
            path: "forest.csv".to_string(),
            line: 3,
            reason: "expected 2 columns, found 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed CSV in forest.csv at line 3: expected 2 columns, found 1"
        );
    }

    #[test]
    fn test_reduction_error_display() {
        let error = CliError::ReductionError("empty input".to_string());
        assert_eq!(error.to_string(), "Reduction error: empty input");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::InvalidPattern("[".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().starts_with("Invalid file pattern:"));
    }
}
