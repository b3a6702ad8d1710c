//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types pin the wire format of listing requests and responses and
//! keep it apart from the core `Page` and `ListQuery` types.

pub mod pokemons;

pub use pokemons::{ListParams, ListResponse, page_url};
