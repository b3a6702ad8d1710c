//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the store, the PokeAPI client, the
//! disk cache and the services are wired together.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use pokedex_core::{
    EntryDiskCache, PokemonCatalogPort, PokemonRepository, PokemonService, RemoteCatalog,
    RemoteCatalogConfig,
};
use pokedex_db::{CoreFactory, setup_database};
use pokedex_pokeapi::{DefaultPokeApiClient, PokeApiClientConfig};
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory for per-entry catalog cache files.
    pub cache_dir: PathBuf,
    /// PokeAPI client settings.
    pub pokeapi: PokeApiClientConfig,
    /// Aggregate size and fetch concurrency.
    pub catalog: RemoteCatalogConfig,
    /// Origin used when building `next`/`previous` links.
    pub public_base_url: String,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Set CORS to allow specific origins. An empty list allows all.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = if origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(origins)
        };
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The merged listing / lookup / creation service.
    pub service: Arc<PokemonService>,
    /// Origin for pagination links.
    pub public_base_url: Url,
}

impl AxumContext {
    pub fn new(service: Arc<PokemonService>, public_base_url: Url) -> Self {
        Self {
            service,
            public_base_url,
        }
    }
}

/// Parse and check the origin used for pagination links.
pub fn parse_public_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("invalid public URL '{raw}'"))?;
    anyhow::ensure!(
        !url.cannot_be_a_base(),
        "public URL '{raw}' cannot carry a path"
    );
    Ok(url)
}

/// Bootstrap the services from `config`.
///
/// Opens (and if needed creates) the database. The remote catalog is not
/// touched until the first listing request.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    info!(
        target: "pokedex.paths",
        database_path = %config.database_path.display(),
        cache_dir = %config.cache_dir.display(),
        pokeapi = config.pokeapi.base_url(),
        "Axum bootstrap resolved paths"
    );

    let public_base_url = parse_public_base_url(&config.public_base_url)?;

    // 1. Local store
    let pool = setup_database(&config.database_path).await?;
    let repo: Arc<dyn PokemonRepository> = CoreFactory::pokemon_repository(pool);

    // 2. Remote catalog with disk memoization
    let client = DefaultPokeApiClient::new(&config.pokeapi)
        .context("failed to build PokeAPI client")?;
    let port: Arc<dyn PokemonCatalogPort> = Arc::new(client);
    let catalog = Arc::new(RemoteCatalog::new(
        port,
        Some(EntryDiskCache::new(&config.cache_dir)),
        config.catalog,
    ));

    // 3. Merged service
    let service = Arc::new(PokemonService::new(repo, catalog));

    Ok(AxumContext::new(service, public_base_url))
}

/// Start the web server and run until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("pokedex listening on http://{addr} (public URL {})", config.public_base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown requested");
        })
        .await?;
    Ok(())
}
