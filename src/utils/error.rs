use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Upstream {url} responded with status {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: String },

    #[error("Roster is full: at most {limit} entries allowed")]
    RosterFull { limit: usize },

    #[error("{name} (#{pokemon_id}) is already in the roster")]
    DuplicateEntry { pokemon_id: u32, name: String },

    #[error("Request rejected by backend: {message}")]
    Conflict { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Operation partially failed: {message}")]
    PartialFailure { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Rule,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ArenaError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::UpstreamStatus { .. } => ErrorCategory::Network,
            Self::SerializationError(_) | Self::NotFound { .. } | Self::ValidationError { .. } => {
                ErrorCategory::Data
            }
            Self::RosterFull { .. } | Self::DuplicateEntry { .. } | Self::Conflict { .. } => {
                ErrorCategory::Rule
            }
            Self::IoError(_) | Self::PartialFailure { .. } => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 規則違反只是使用者操作被拒絕
            ErrorCategory::Rule => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::HttpError(_) => "Check your network connection and that the services are reachable",
            Self::UpstreamStatus { .. } => "The remote service returned an error, try again later",
            Self::NotFound { .. } => "Check the identifier; list the catalog or roster to find valid ids",
            Self::RosterFull { .. } => "Remove an entry from the roster before adding another",
            Self::DuplicateEntry { .. } => "Pick a creature that is not already in the roster",
            Self::Conflict { .. } => "Refresh the roster and retry the operation",
            Self::ValidationError { .. } => "Check the command arguments",
            Self::PartialFailure { .. } => "Some records may remain; run the command again",
            Self::SerializationError(_) => "The service returned data in an unexpected format",
            Self::IoError(_) => "Check file permissions and available disk space",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration value and restart",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(e) if e.is_connect() => "Could not connect to the service".to_string(),
            Self::HttpError(e) if e.is_timeout() => "The request timed out".to_string(),
            Self::HttpError(_) => "A network request failed".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArenaError>;
