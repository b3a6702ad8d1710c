//! Application services built on the ports.
//!
//! - [`EntryDiskCache`]: per-name JSON memoization of remote entries
//! - [`RemoteCatalog`]: the remote catalog as an offset-addressable sequence
//! - [`PokemonService`]: the merged per-namespace view

mod disk_cache;
mod pokemon_service;
mod remote_catalog;

pub use disk_cache::{DiskCacheError, EntryDiskCache};
pub use pokemon_service::{ListQuery, PokemonService};
pub use remote_catalog::{
    DEFAULT_CATALOG_LIMIT, DEFAULT_FETCH_CONCURRENCY, RemoteCatalog, RemoteCatalogConfig,
    RemotePage,
};
