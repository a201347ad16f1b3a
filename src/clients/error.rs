//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur while talking to the ordering system.
///
/// The `Display` text of every variant is user-facing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The message was blank after trimming; nothing was sent.
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// The bounded wait elapsed and the request was abandoned.
    #[error("Request timed out. Please try again.")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The response body was not JSON.
    #[error("Invalid response format from server")]
    InvalidResponseFormat,

    /// The request could not be sent or the body could not be read.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
