//! Error types for the Dotide API client.
//!
//! Every failure surfaced by this crate is an [`Error`]. HTTP error statuses
//! (including 404) arrive as [`Error::Api`]; malformed or unexpected JSON,
//! including timestamps in the wrong format, arrives as [`Error::Json`].

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Dotide operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Dotide API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a status >= 400
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The `message` field of the error body
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// A response body was required but the server sent none
    #[error("Empty response body")]
    EmptyBody,

    /// A delete returned a body instead of an empty response
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(Value),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The model is not bound to a manager
    #[error("Model is not bound to a manager")]
    Detached,
}

impl Error {
    /// Returns `true` if the server answered 404.
    ///
    /// # Example
    ///
    /// ```
    /// use dotide_rs::Error;
    ///
    /// fn missing(err: &Error) -> bool {
    ///     err.is_not_found()
    /// }
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) | Error::Detached => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            body,
        }
    }
}
