use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected document shape: {message}")]
    ShapeError { message: String },

    #[error("Unrecognized JSON format: expected a \"grouped_products\" array (LangChain export) or a \"groups\" array (notebook export)")]
    UnrecognizedFormat,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    InputData,
    FileSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ConvertError {
    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) => ErrorCategory::FileSystem,
            ConvertError::SerializationError(_)
            | ConvertError::ShapeError { .. }
            | ConvertError::UnrecognizedFormat => ErrorCategory::InputData,
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
            ErrorCategory::InputData | ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    /// Process exit code for a failed run. Never 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError(_) => {
                "Check that the input file exists and that its directory is writable"
            }
            ConvertError::SerializationError(_) => {
                "Make sure the input file contains valid JSON"
            }
            ConvertError::ShapeError { .. } => {
                "The input must be a JSON object exported by the grouping tool"
            }
            ConvertError::UnrecognizedFormat => {
                "Pass --format langchain or --format notebook explicitly"
            }
            ConvertError::ConfigError { .. } => "Check the settings file for TOML syntax errors",
            ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => {
                "Run with --help to see the accepted arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("Could not read or write a file: {}", e),
            ConvertError::SerializationError(e) => format!("The input is not valid JSON: {}", e),
            ConvertError::ShapeError { message } => {
                format!("The input does not look like a grouping export: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
