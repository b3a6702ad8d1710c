//! `PokemonCatalogPort` implementation for `PokeApiClient`.

use async_trait::async_trait;
use pokedex_core::{CatalogError, CatalogListing, CatalogResult, Entry, PokemonCatalogPort};

use crate::client::PokeApiClient;
use crate::error::PokeApiError;
use crate::http::HttpBackend;
use crate::url::pokemon_name_from_url;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert `PokeApiError` to the core `CatalogError`.
fn map_error(err: PokeApiError) -> CatalogError {
    match err {
        PokeApiError::PokemonNotFound { name } => CatalogError::NotFound { name },
        // Only a missing detail resource is a missing pokemon; a 404 on the
        // listing means the upstream itself is misconfigured.
        PokeApiError::ApiRequestFailed { status, url } => match pokemon_name_from_url(&url) {
            Some(name) if status == 404 => CatalogError::NotFound { name },
            _ => CatalogError::Network {
                message: format!("API request failed with status {status}: {url}"),
            },
        },
        PokeApiError::InvalidResponse { message } => CatalogError::InvalidResponse { message },
        PokeApiError::Network(e) => CatalogError::Network {
            message: e.to_string(),
        },
        PokeApiError::InvalidUrl(e) => CatalogError::InvalidResponse {
            message: format!("invalid URL: {e}"),
        },
        PokeApiError::JsonParse(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> PokemonCatalogPort for PokeApiClient<B> {
    async fn list(&self, limit: usize, offset: usize) -> CatalogResult<CatalogListing> {
        self.list_pokemon(limit, offset).await.map_err(map_error)
    }

    async fn resolve(&self, name: &str) -> CatalogResult<Entry> {
        self.get_pokemon(name).await.map_err(map_error)
    }
}
