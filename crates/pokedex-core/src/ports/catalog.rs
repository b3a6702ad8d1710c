//! Remote catalog port.
//!
//! The catalog is read-only and has its own canonical ordering, which the
//! core treats as an opaque sequence of `count` names.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Entry;

/// One page of names as listed by the remote source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogListing {
    /// Total number of entries the source reports.
    pub count: usize,
    /// Names on this page, in source order.
    pub names: Vec<String>,
}

/// Errors from catalog port operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source has no entry with this name.
    #[error("Pokemon not found in catalog: {name}")]
    NotFound {
        /// The name that was looked up
        name: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The source answered with something we could not understand.
    #[error("Invalid catalog response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

impl CatalogError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for catalog port operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Access to the remote Pokémon catalog.
#[async_trait]
pub trait PokemonCatalogPort: Send + Sync {
    /// List `limit` names starting at `offset`, using the source's pagination.
    async fn list(&self, limit: usize, offset: usize) -> CatalogResult<CatalogListing>;

    /// Fetch and normalize a single entry by name.
    async fn resolve(&self, name: &str) -> CatalogResult<Entry>;
}
