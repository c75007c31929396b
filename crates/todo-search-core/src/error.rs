//! Error Types

use thiserror::Error as ThisError;

/// Failure of the startup fetch. Never shown to the user, only logged.
#[derive(Debug, ThisError)]
pub enum FetchError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Search field validation failure. `Display` is the inline message.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum QueryError {
    #[error("Search query is required")]
    Required,

    #[error("Search query must be at least {min} characters")]
    TooShort { min: usize },
}
