//! Error types for the JioSaavn API.

use thiserror::Error;

/// Main error type for all JioSaavn operations.
#[derive(Debug, Error)]
pub enum SaavnError {
    /// The suggestions endpoint signalled failure or returned no data.
    #[error("Suggestions not found: {0}")]
    SuggestionsNotFound(String),

    /// A station could not be created for the seed song.
    #[error("Station not created: {0}")]
    StationNotCreated(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Generic API error with message.
    #[error("API error: {0}")]
    ApiError(String),
}

/// Result type alias for JioSaavn operations.
pub type Result<T> = std::result::Result<T, SaavnError>;
