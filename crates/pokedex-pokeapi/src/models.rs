//! Raw PokeAPI response shapes.
//!
//! Only the fields the catalog needs are modelled; everything else in the
//! documents is ignored.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::config::PokeApiClientConfig;
use crate::error::PokeApiResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_retries: u8,
    pub retry_base_delay_ms: u64,
}

impl PokeApiConfig {
    pub fn from_public(config: &PokeApiClientConfig) -> PokeApiResult<Self> {
        Ok(Self {
            base_url: Url::parse(config.base_url.trim_end_matches('/'))?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            retry_base_delay_ms: u64::try_from(config.retry_base_delay.as_millis())
                .unwrap_or(u64::MAX),
        })
    }
}

// ============================================================================
// Listing
// ============================================================================

/// A `{name, url}` reference as used throughout PokeAPI.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// `GET /pokemon?limit=&offset=`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonListResponse {
    pub count: usize,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

// ============================================================================
// Detail
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// `GET /pokemon/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    pub weight: i64,
    pub height: i64,
    // null for some alternate forms
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub forms: Vec<NamedResource>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}
