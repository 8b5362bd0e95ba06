/*!
 * Error types for the lingopad application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the translation backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Error when sending the request fails at the transport level
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a backend response fails
    #[error("Failed to parse backend response: {0}")]
    ParseError(String),

    /// Error returned as a non-success HTTP status
    #[error("Backend responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the backend
        message: String,
    },

    /// The backend answered but reported failure (success=false)
    #[error("{message}")]
    Rejected {
        /// Error message supplied by the backend
        message: String,
    },
}

impl BackendError {
    /// Message suitable for a user-facing notice, with a fallback when the
    /// backend supplied none.
    pub fn notice_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the failure happened before any backend verdict was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::ParseError(_))
    }
}

/// Errors from optional platform capabilities (clipboard, speech)
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// The capability is not available on this platform
    #[error("{0} is not supported")]
    Unsupported(String),

    /// The capability exists but the operation failed
    #[error("{0}")]
    Failed(String),
}

/// Errors that can occur inside a translation session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Invalid user input, caught before any network call
    #[error("{0}")]
    Validation(String),

    /// Error from the translation backend
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Error from a platform capability
    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),
}

impl From<anyhow::Error> for SessionError {
    fn from(error: anyhow::Error) -> Self {
        Self::Validation(error.to_string())
    }
}
