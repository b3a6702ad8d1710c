//! PokeAPI client for listing and fetching pokemon.

use crate::config::PokeApiClientConfig;
use crate::error::PokeApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{PokeApiConfig, PokemonDetail, PokemonListResponse};
use crate::parsing::{listing_from_response, normalize_pokemon};
use crate::url::{build_list_url, build_pokemon_url};
use pokedex_core::{CatalogListing, Entry};
use tracing::debug;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default PokeAPI client using the reqwest HTTP backend.
pub type DefaultPokeApiClient = PokeApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the PokeAPI `pokemon` endpoints.
///
/// Generic over the HTTP backend for testing; use [`DefaultPokeApiClient`]
/// in production code.
pub struct PokeApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: PokeApiConfig,
}

impl DefaultPokeApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &PokeApiClientConfig) -> PokeApiResult<Self> {
        let config = PokeApiConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> PokeApiClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: PokeApiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// One listing page as reported by PokeAPI.
    pub(crate) async fn list_pokemon(
        &self,
        limit: usize,
        offset: usize,
    ) -> PokeApiResult<CatalogListing> {
        let url = build_list_url(&self.config, limit, offset);
        debug!(url = %url, "Listing PokeAPI pokemon");
        let response: PokemonListResponse = self.backend.get_json(&url).await?;
        Ok(listing_from_response(response))
    }

    /// A single pokemon, normalized.
    pub(crate) async fn get_pokemon(&self, name: &str) -> PokeApiResult<Entry> {
        let url = build_pokemon_url(&self.config, name);
        debug!(url = %url, "Fetching PokeAPI pokemon");
        let detail: PokemonDetail = self.backend.get_json(&url).await?;
        Ok(normalize_pokemon(detail))
    }
}
