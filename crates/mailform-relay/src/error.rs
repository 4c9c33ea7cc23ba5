//! Error types for relay operations.

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the mail relay.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("relay rejected the request: {code} {body}")]
    Rejected {
        /// HTTP status code returned by the relay.
        code: u16,
        /// Response body, usually a short diagnostic string.
        body: String,
    },

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Creates a rejection error from a status code and response body.
    #[must_use]
    pub fn rejected(code: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            body: body.into(),
        }
    }
}
