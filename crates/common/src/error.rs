//! Common error types and handling for AssetDesk

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when a failure carries nothing presentable
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Common error type for the AssetDesk client core
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Get the error code for structured logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Backend(_) => "BACKEND_ERROR",
            Error::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Convert the error into the message a user gets to see.
    ///
    /// Known failures keep their own text; anything unexpected collapses to
    /// [`GENERIC_ERROR_MESSAGE`] so raw internals never reach the view.
    pub fn user_message(&self) -> String {
        match self {
            Error::Unexpected(_) => GENERIC_ERROR_MESSAGE.to_string(),
            Error::Validation(msg)
            | Error::NotFound(msg)
            | Error::Backend(msg)
            | Error::Configuration(msg)
                if msg.trim().is_empty() =>
            {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}
