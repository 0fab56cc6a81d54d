use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input '{value}' for {field}: {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown command: {command}")]
    UnknownCommandError { command: String },

    #[error("Unknown input field: {name}")]
    UnknownFieldError { name: String },

    #[error("Unsupported export format: {name}")]
    UnsupportedFormatError { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Export,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EstimatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EstimatorError::IoError(_) => ErrorCategory::Io,
            EstimatorError::CsvError(_)
            | EstimatorError::ZipError(_)
            | EstimatorError::SerializationError(_) => ErrorCategory::Export,
            EstimatorError::TomlParseError { .. }
            | EstimatorError::InvalidConfigValueError { .. }
            | EstimatorError::UnsupportedFormatError { .. } => ErrorCategory::Configuration,
            EstimatorError::InvalidInputError { .. }
            | EstimatorError::UnknownCommandError { .. }
            | EstimatorError::UnknownFieldError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Export => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EstimatorError::IoError(e) => format!("Could not read or write a file: {}", e),
            EstimatorError::CsvError(_)
            | EstimatorError::ZipError(_)
            | EstimatorError::SerializationError(_) => {
                format!("Failed to build the export file: {}", self)
            }
            EstimatorError::TomlParseError { .. } => {
                "The scenario file is not valid TOML".to_string()
            }
            EstimatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            EstimatorError::InvalidInputError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            EstimatorError::UnknownCommandError { command } => {
                format!("'{}' is not a command", command)
            }
            EstimatorError::UnknownFieldError { name } => format!("There is no input named '{}'", name),
            EstimatorError::UnsupportedFormatError { name } => {
                format!("Cannot export to '{}'", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EstimatorError::IoError(_) => "Check that the output directory exists and is writable",
            EstimatorError::CsvError(_)
            | EstimatorError::ZipError(_)
            | EstimatorError::SerializationError(_) => "Retry the export or pick another format",
            EstimatorError::TomlParseError { .. } => "Fix the TOML syntax in the scenario file",
            EstimatorError::InvalidConfigValueError { .. } => {
                "Review the command line flags and scenario file"
            }
            EstimatorError::InvalidInputError { .. } => {
                "Use a number; the retention period must be a whole number of months"
            }
            EstimatorError::UnknownCommandError { .. } => "Type 'help' to list the commands",
            EstimatorError::UnknownFieldError { .. } => "Type 'show' to list the input fields",
            EstimatorError::UnsupportedFormatError { .. } => "Supported formats: csv, pdf, json, bundle",
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = EstimatorError::UnsupportedFormatError {
            name: "xlsx".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = EstimatorError::InvalidInputError {
            field: "retention_period_months".to_string(),
            value: "1.5".to_string(),
            reason: "not an integer".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: EstimatorError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("denied"));
    }
}
