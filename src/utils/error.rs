use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Output could not be encoded.
    Medium,
    /// Bad input: catalog file or command line.
    High,
    /// The environment failed us (filesystem, closed stdout).
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SortError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SortError::IoError(_) => ErrorSeverity::Critical,
            SortError::CsvError(_) | SortError::SerializationError(_) => ErrorSeverity::Medium,
            SortError::ConfigValidationError { .. } | SortError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SortError::IoError(e) => format!("Could not read or write a file: {}", e),
            SortError::CsvError(e) => format!("Failed to write CSV output: {}", e),
            SortError::SerializationError(e) => format!("Failed to write JSON output: {}", e),
            SortError::ConfigValidationError { field, message } => {
                format!("The catalog could not be loaded ({}): {}", field, message)
            }
            SortError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SortError::IoError(_) => "Check that the catalog path exists and is readable",
            SortError::CsvError(_) | SortError::SerializationError(_) => {
                "Try the plain text format with --format text"
            }
            SortError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with an [[items]] table per item"
            }
            SortError::InvalidConfigValueError { .. } => {
                "Every item needs a non-empty name and a finite, non-negative price"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
