//! Composition utilities for wiring the local store into the core.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::repositories::SqlitePokemonRepository;

/// Factory for `SQLite`-backed repository instances.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a pokemon repository from a pool.
    pub fn pokemon_repository(pool: SqlitePool) -> Arc<SqlitePokemonRepository> {
        Arc::new(SqlitePokemonRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// In-memory `SQLite` with the production schema already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over this database.
    pub fn pokemon_repository(&self) -> Arc<SqlitePokemonRepository> {
        CoreFactory::pokemon_repository(self.pool.clone())
    }
}
