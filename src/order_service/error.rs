//! Error types for the order service.

use crate::clients::ApiError;
use thiserror::Error;

/// Errors surfaced by [`OrderService`](super::OrderService).
///
/// The `Display` text is what ends up in the store's `error` field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The message failed client-side validation; no request was made.
    #[error("{0}")]
    Validation(String),

    /// The API client failed (timeout, HTTP status, transport, unparseable body).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The body was JSON but not an object of the expected shape.
    #[error("Invalid response from ordering system")]
    InvalidResponse,
}
