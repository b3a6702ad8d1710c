#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultPokeApiClient is meant to be used through the PokemonCatalogPort
// trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPokeApiClient;

// Configuration
pub use config::{DEFAULT_POKEAPI_BASE_URL, PokeApiClientConfig};

// Errors surfaced by client construction
pub use error::PokeApiError;
