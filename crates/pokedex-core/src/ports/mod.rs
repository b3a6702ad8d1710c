//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are minimal and storage-focused
//! - Catalog errors distinguish "not found" from every other failure

pub mod catalog;
pub mod pokemon_repository;

use thiserror::Error;

pub use catalog::{CatalogError, CatalogListing, CatalogResult, PokemonCatalogPort};
pub use pokemon_repository::PokemonRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by core services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Neither source knows the requested entry.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A local entry with the same (namespace, name) already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The request was malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unexpected storage failure.
    #[error("Repository error: {0}")]
    Repository(RepositoryError),

    /// The remote catalog failed.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(msg),
            other => Self::Repository(other),
        }
    }
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { name } => Self::NotFound(format!("Pokemon '{name}'")),
            other => Self::ExternalService(other.to_string()),
        }
    }
}
