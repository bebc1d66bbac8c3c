//! SDK Error Types

use jsonrpsee::core::ClientError;
use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// Failures of a call made through `JobwatchClient`
#[derive(Debug, Error)]
pub enum SdkError {
    /// The endpoint URL was rejected while building the HTTP client
    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    /// The daemon answered with a JSON-RPC error object
    #[error("daemon error {code}: {message}")]
    Rpc { code: i32, message: String },

    /// The request could not be sent as by-name params
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// No usable answer: network failure, timeout or an unreadable reply
    #[error("call failed: {0}")]
    Call(String),
}

impl SdkError {
    /// JSON-RPC error code, if the daemon answered with an error
    pub fn code(&self) -> Option<i32> {
        match self {
            SdkError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<ClientError> for SdkError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Call(obj) => SdkError::Rpc {
                code: obj.code(),
                message: obj.message().to_string(),
            },
            other => SdkError::Call(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Encode(err.to_string())
    }
}
