#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use domain::{
    DEFAULT_HEIGHT, DEFAULT_LIMIT, DEFAULT_WEIGHT, Entry, EntryId, LOCAL_PLACEHOLDER_IMAGE,
    LocalPokemon, NewPokemon, Page, PageWindow, Stats, filter_by_name, paginate,
};
pub use paths::{
    DEFAULT_CACHE_DIR_RELATIVE, PathError, data_root, database_path, default_cache_dir,
    ensure_directory,
};
pub use ports::{
    CatalogError, CatalogListing, CatalogResult, CoreError, PokemonCatalogPort,
    PokemonRepository, RepositoryError,
};
pub use services::{
    DEFAULT_CATALOG_LIMIT, DEFAULT_FETCH_CONCURRENCY, DiskCacheError, EntryDiskCache, ListQuery,
    PokemonService, RemoteCatalog, RemoteCatalogConfig, RemotePage,
};

// Only used by integration tests under tests/
#[cfg(test)]
use proptest as _;
