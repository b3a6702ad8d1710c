//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `PokemonService`.

pub mod admin;
pub mod pokemons;

/// Liveness probe.
pub async fn ping() -> &'static str {
    "pong"
}
