//! Error types for PokeAPI operations.
//!
//! Mapped to `CatalogError` at the port boundary.

use thiserror::Error;

/// Result type alias for PokeAPI operations.
pub type PokeApiResult<T> = Result<T, PokeApiError>;

/// Errors talking to PokeAPI.
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// API request failed with an HTTP error status.
    #[error("PokeAPI request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned a document that does not have the expected shape.
    #[error("Invalid response from PokeAPI: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The requested pokemon does not exist.
    #[error("Pokemon '{name}' not found on PokeAPI")]
    PokemonNotFound {
        /// The name that was looked up
        name: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
