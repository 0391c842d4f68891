use crate::domain::model::NumberKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid {kind} length: got {length} digits, expected {expected}")]
    InvalidLength {
        kind: NumberKind,
        length: usize,
        expected: String,
    },

    #[error("Unsupported purpose: {purpose}")]
    UnsupportedPurpose { purpose: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EngineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EngineError::InvalidLength { .. } | EngineError::UnsupportedPurpose { .. } => {
                ErrorCategory::Input
            }
            EngineError::ConfigValidationError { .. }
            | EngineError::InvalidConfigValueError { .. }
            | EngineError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EngineError::IoError(_)
            | EngineError::SerializationError(_)
            | EngineError::CsvError(_) => ErrorCategory::System,
        }
    }

    /// Unsupported purposes are recoverable with best-of-all scoring, so they
    /// rank below a malformed number.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::UnsupportedPurpose { .. } => ErrorSeverity::Low,
            EngineError::InvalidLength { .. } => ErrorSeverity::Medium,
            EngineError::ConfigValidationError { .. }
            | EngineError::InvalidConfigValueError { .. }
            | EngineError::MissingConfigError { .. }
            | EngineError::CsvError(_) => ErrorSeverity::High,
            EngineError::IoError(_) | EngineError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Input errors are the only ones a caller is expected to retry with
    /// different arguments.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EngineError::InvalidLength { kind, expected, .. } => format!(
                "Provide a {} with {} digits; separators and a +84 prefix are accepted",
                kind, expected
            ),
            EngineError::UnsupportedPurpose { .. } => format!(
                "Use one of: {}, or omit the purpose to get the best match",
                crate::domain::model::Purpose::ALL
                    .iter()
                    .map(|p| p.key())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            EngineError::ConfigValidationError { field, .. }
            | EngineError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' entry of the configuration file", field)
            }
            EngineError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file or pass it on the command line", field)
            }
            EngineError::IoError(_) => {
                "Check that the file exists and that you have permission to read or write it"
                    .to_string()
            }
            EngineError::SerializationError(_) => {
                "This is a bug in the report encoder; please report it".to_string()
            }
            EngineError::CsvError(_) => {
                "Check that the input file is valid CSV with a header row".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EngineError::InvalidLength { kind, length, .. } => {
                format!("The {} has {} digits, which is not a valid length", kind, length)
            }
            EngineError::UnsupportedPurpose { purpose } => {
                format!("'{}' is not a purpose this engine can score", purpose)
            }
            EngineError::IoError(e) => format!("Could not access a file: {}", e),
            EngineError::SerializationError(e) => format!("Could not encode the report: {}", e),
            EngineError::CsvError(e) => format!("Could not process the CSV file: {}", e),
            other => format!("Invalid configuration: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_recoverable() {
        let err = EngineError::UnsupportedPurpose {
            purpose: "health".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.recovery_suggestion().contains("business"));

        let err = EngineError::InvalidLength {
            kind: NumberKind::Phone,
            length: 4,
            expected: "9-11".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.to_string().contains("4 digits"));
    }

    #[test]
    fn test_config_errors_are_not_recoverable() {
        let err = EngineError::MissingConfigError {
            field: "batch.input_path".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
