//! Command-line and environment configuration for the server binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pokedex_core::{
    DEFAULT_CATALOG_LIMIT, DEFAULT_FETCH_CONCURRENCY, RemoteCatalogConfig, database_path,
    default_cache_dir,
};
use pokedex_pokeapi::{DEFAULT_POKEAPI_BASE_URL, PokeApiClientConfig};

use crate::bootstrap::{CorsConfig, ServerConfig};

/// Serve the pokedex REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex", version, about)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "POKEDEX_PORT", default_value_t = 3000)]
    pub port: u16,

    /// `SQLite` database file [default: <data dir>/pokedex/data/pokedex.db]
    #[arg(long, env = "POKEDEX_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory for cached catalog entries [default: ./cache]
    #[arg(long, env = "POKEDEX_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// PokeAPI root URL
    #[arg(long, env = "POKEDEX_POKEAPI_URL", default_value = DEFAULT_POKEAPI_BASE_URL)]
    pub pokeapi_url: String,

    /// Origin used in pagination links [default: http://localhost:<port>]
    #[arg(long, env = "POKEDEX_PUBLIC_URL")]
    pub public_url: Option<String>,

    /// Maximum number of remote entries merged into listings
    #[arg(long, env = "POKEDEX_CATALOG_LIMIT", default_value_t = DEFAULT_CATALOG_LIMIT)]
    pub catalog_limit: usize,

    /// Concurrent catalog fetches while populating
    #[arg(long, env = "POKEDEX_FETCH_CONCURRENCY", default_value_t = DEFAULT_FETCH_CONCURRENCY)]
    pub fetch_concurrency: usize,

    /// Allowed CORS origin, repeatable (none = allow all)
    #[arg(
        long = "allowed-origin",
        env = "POKEDEX_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,
}

impl ServeArgs {
    /// Resolve defaults into a [`ServerConfig`].
    pub fn into_config(self) -> Result<ServerConfig> {
        let database_path = match self.database {
            Some(path) => path,
            None => database_path()?,
        };
        let cache_dir = match self.cache_dir {
            Some(dir) => dir,
            None => default_cache_dir()?,
        };
        let public_base_url = self
            .public_url
            .unwrap_or_else(|| format!("http://localhost:{}", self.port));

        let config = ServerConfig {
            port: self.port,
            database_path,
            cache_dir,
            pokeapi: PokeApiClientConfig::new().with_base_url(self.pokeapi_url),
            catalog: RemoteCatalogConfig {
                catalog_limit: self.catalog_limit,
                fetch_concurrency: self.fetch_concurrency.max(1),
            },
            public_base_url,
            cors: CorsConfig::AllowAll,
        };
        Ok(config.with_allowed_origins(self.allowed_origins))
    }
}
