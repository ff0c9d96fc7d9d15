use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Search endpoint {url} answered with status {status}")]
    StatusError { url: String, status: u16 },

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown search endpoint: {endpoint}")]
    UnknownEndpointError { endpoint: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
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

impl SearchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SearchError::HttpError(_) | SearchError::StatusError { .. } => ErrorCategory::Network,
            SearchError::SerializationError(_) | SearchError::CsvError(_) => ErrorCategory::Data,
            SearchError::ConfigError { .. }
            | SearchError::InvalidConfigValueError { .. }
            | SearchError::UnknownEndpointError { .. } => ErrorCategory::Configuration,
            SearchError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SearchError::HttpError(e) if e.is_timeout() => {
                "The search server did not answer in time".to_string()
            }
            SearchError::HttpError(e) if e.is_connect() => {
                "Could not connect to the search server".to_string()
            }
            SearchError::HttpError(_) => "The search request failed".to_string(),
            SearchError::StatusError { status, .. } => {
                format!("The search server rejected the request (HTTP {})", status)
            }
            SearchError::SerializationError(_) => {
                "The search server returned data that is not a result list".to_string()
            }
            SearchError::CsvError(_) => "Could not write the table as CSV".to_string(),
            SearchError::IoError(e) => format!("File system error: {}", e),
            SearchError::ConfigError { message } => format!("Configuration problem: {}", message),
            SearchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SearchError::UnknownEndpointError { endpoint } => {
                format!("No search data for endpoint '{}'", endpoint)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the beer-sample server is running and --base-url points at it",
            ErrorCategory::Data => "Check that the endpoint returns a JSON array of {id, name, brewery} objects",
            ErrorCategory::Configuration => "Review the command line flags and the TOML config file",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
