//! Server entry point.
//!
//! Loads `.env`, installs the tracing subscriber and hands the parsed
//! arguments to the composition root in [`pokedex_axum::bootstrap`].

use clap::Parser;
use pokedex_axum::{ServeArgs, start_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .try_init()
        .ok();

    let config = ServeArgs::parse().into_config()?;
    start_server(config).await
}
