use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("Validation error on '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Employee with ID {id} not found")]
    NotFound { id: String },

    #[error("Downstream returned no data for {operation}")]
    EmptyResult { operation: String },

    #[error("Downstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed downstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FacadeError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Short, stable label used in logs and API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            FacadeError::Validation { .. } => "ValidationError",
            FacadeError::NotFound { .. } => "NotFound",
            FacadeError::EmptyResult { .. } => "EmptyResult",
            FacadeError::Transport(_) | FacadeError::Decode(_) => "TransportFailure",
            FacadeError::Config { .. } => "ConfigError",
            FacadeError::Io(_) => "IoError",
        }
    }

    /// Whether the failure is the caller's fault rather than the downstream's.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FacadeError::Validation { .. } | FacadeError::NotFound { .. } | FacadeError::EmptyResult { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FacadeError>;
