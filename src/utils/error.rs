use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    ApiStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Project data error: {message}")]
    ProjectError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Filesystem,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::ApiError(_) | ExportError::ApiStatusError { .. } => ErrorCategory::Network,
            ExportError::IoError(_) => ErrorCategory::Filesystem,
            ExportError::SerializationError(_) | ExportError::ProjectError { .. } => {
                ErrorCategory::Data
            }
            ExportError::ConfigError { .. }
            | ExportError::ConfigValidationError { .. }
            | ExportError::InvalidConfigValueError { .. }
            | ExportError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExportError::ApiError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            ExportError::ApiStatusError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            ExportError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExportError::ApiError(_) => {
                "Check network connectivity and the API endpoint, then retry"
            }
            ExportError::ApiStatusError { status: 401 | 403, .. } => {
                "Check that the API token is valid and has access to the project"
            }
            ExportError::ApiStatusError { status: 404, .. } => {
                "Check the team, project and board ids"
            }
            ExportError::ApiStatusError { .. } => "The API rejected the request; retry later",
            ExportError::IoError(_) => {
                "Check that the output directory is writable and the disk is not full"
            }
            ExportError::SerializationError(_) | ExportError::ProjectError { .. } => {
                "Make sure the input is a complete project export in JSON format"
            }
            ExportError::ConfigError { .. }
            | ExportError::ConfigValidationError { .. }
            | ExportError::InvalidConfigValueError { .. }
            | ExportError::MissingConfigError { .. } => {
                "Review the configuration file and command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExportError::ApiError(_) | ExportError::ApiStatusError { .. } => {
                format!("Could not fetch the project: {}", self)
            }
            ExportError::IoError(e) => format!("Could not write output files: {}", e),
            ExportError::SerializationError(e) => format!("Could not read project data: {}", e),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
