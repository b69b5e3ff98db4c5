//! Normalized failure surface for every API call.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP client folds all transport-level failures into this one enum
//! before they reach callers, so pages can match a closed set and show a
//! user-facing message without inspecting raw responses.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::types::FieldError;

/// Fallback message when the server supplies no usable detail.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Every way an API call can fail, normalized.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{message}")]
    Network {
        /// User-facing description of the failure.
        message: String,
    },
    /// The session could not be refreshed and has been cleared.
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,
    /// The server rejected the request with structured field errors.
    #[error("{message}")]
    Validation {
        /// Normalized summary message.
        message: String,
        /// HTTP status of the rejection.
        status: u16,
        /// Per-field failures as supplied by the backend.
        field_errors: Vec<FieldError>,
    },
    /// Any other non-success HTTP status.
    #[error("{message}")]
    Api {
        /// Normalized summary message.
        message: String,
        /// HTTP status of the rejection.
        status: u16,
    },
    /// A success response whose shape the client does not understand.
    #[error("{0}")]
    Contract(String),
}

impl ApiError {
    /// HTTP status carried by the error, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { status, .. } | ApiError::Api { status, .. } => Some(*status),
            ApiError::Network { .. } | ApiError::SessionExpired | ApiError::Contract(_) => None,
        }
    }
}
