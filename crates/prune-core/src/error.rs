//! Error types for the core library.

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::EmailId;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level HTTP failure (connection refused, timeout, bad body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
        /// Response body, possibly empty.
        body: String,
    },

    /// The requested email does not exist on the server.
    #[error("Email not found: {0}")]
    NotFound(EmailId),

    /// Base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error means "the request failed".
    ///
    /// Transport failures and every non-2xx answer fall into this one bucket;
    /// local configuration problems do not.
    #[must_use]
    pub const fn is_request_failure(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::NotFound(_))
    }

    /// Whether the server reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Status { status, .. } => *status == StatusCode::NOT_FOUND,
            Self::Http(e) => e.status() == Some(StatusCode::NOT_FOUND),
            _ => false,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
