use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid token '{token}': {reason}")]
    InvalidTokenError { token: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl KataError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KataError::IoError(_) => ErrorCategory::Io,
            KataError::TomlError(_)
            | KataError::ConfigValidationError { .. }
            | KataError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            KataError::InvalidTokenError { .. } => ErrorCategory::Input,
            KataError::SerializationError(_) => ErrorCategory::Serialization,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KataError::IoError(_) => "Check that the file exists and is readable/writable".to_string(),
            KataError::TomlError(_) => {
                "Check the outline file for TOML syntax errors (quotes, brackets, table names)"
                    .to_string()
            }
            KataError::SerializationError(_) => "Retry without --json".to_string(),
            KataError::ConfigValidationError { field, .. }
            | KataError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the outline file", field)
            }
            KataError::InvalidTokenError { .. } => {
                "Use integers, decimals, text, or an integer range such as 1..20".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Configuration => format!("The outline is not valid: {}", self),
            ErrorCategory::Input => format!("Could not read the input: {}", self),
            ErrorCategory::Serialization => format!("Could not format the output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
