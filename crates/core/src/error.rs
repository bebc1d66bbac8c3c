// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// One variant per failure class of a search or subscribe request. Which of
/// them reach the caller and which are downgraded is decided by the
/// aggregation coordinator alone.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed caller input (boundary validation)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown subscriber, or external response without the requested country
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal store failure
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// External source unreachable or answered with a non-success status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed response body or embedded skills markup
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error and reqwest::Error conversions live in the infra crates
// by mapping to AppError::Persistence / AppError::Transport
