//! API Errors

use thiserror::Error;

/// Fallback shown when the backend gave no usable message
pub const GENERIC_FAILURE: &str = "Request failed, please try again";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("timeout")]
    Timeout,
    #[error("http {status}: {message}")]
    Http { status: u16, message: String },
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Envelope came back with `success: false`
    #[error("server error: {0}")]
    Server(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("missing credentials: no bearer token available")]
    MissingCredentials,
}

impl ApiError {
    /// Message suitable for a user-facing notification.
    ///
    /// Server-supplied text is passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(msg) | Self::Unauthorized(msg) | Self::Http { message: msg, .. }
                if !msg.trim().is_empty() =>
            {
                msg.clone()
            }
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
