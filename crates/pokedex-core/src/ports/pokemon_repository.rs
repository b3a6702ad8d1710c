//! Local store port for user-created Pokémon.
//!
//! Entries are partitioned by namespace and unique per (namespace, name).

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{LocalPokemon, NewPokemon};

/// Repository for locally created Pokémon.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Ordering within a namespace is newest first (descending id)
/// - Uniqueness is enforced by the store itself, never by a prior lookup
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Number of entries in `namespace`.
    async fn count(&self, namespace: &str) -> Result<u64, RepositoryError>;

    /// Up to `limit` entries of `namespace` starting at `offset`, newest first.
    ///
    /// Returns an empty list once `offset` reaches the namespace size.
    async fn list_page(
        &self,
        namespace: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<LocalPokemon>, RepositoryError>;

    /// Every entry of `namespace`, newest first.
    async fn list_namespace(&self, namespace: &str) -> Result<Vec<LocalPokemon>, RepositoryError>;

    /// Exact lookup by (namespace, name).
    async fn find_by_name(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<LocalPokemon>, RepositoryError>;

    /// Persist a new entry, applying weight/height defaults.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` when (namespace, name)
    /// is already taken.
    async fn create(
        &self,
        namespace: &str,
        pokemon: &NewPokemon,
    ) -> Result<LocalPokemon, RepositoryError>;

    /// Every entry across all namespaces, ordered by namespace ascending.
    async fn list_all(&self) -> Result<Vec<LocalPokemon>, RepositoryError>;
}
