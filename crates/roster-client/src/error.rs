//! Error types for the roster client.

use thiserror::Error;

/// The main error type for client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the response body was unreadable.
    ///
    /// Covers connection failures and the request timeout.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a `success: false` envelope.
    #[error("service error: {message}")]
    Api {
        /// The envelope's error message.
        message: String,
    },

    /// The service answered `success: true` but omitted the payload.
    #[error("service returned success without data")]
    MissingData,

    /// The base URL could not be parsed.
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
    },
}

/// A specialized Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Check if this error came from a `success: false` envelope.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
