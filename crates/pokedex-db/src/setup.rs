//! Database setup and initialization.
//!
//! Entry points call [`setup_database`] with the resolved database path; the
//! schema is created on first use and left alone afterwards.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
#[cfg(any(test, feature = "test-utils"))]
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;
use tracing::debug;

/// Open (creating if needed) the `SQLite` database at `db_path` and ensure
/// the schema exists.
///
/// # Example
///
/// ```rust,no_run
/// use pokedex_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/pokedex/pokedex.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;
    debug!(path = %db_path.display(), "Database ready");

    Ok(pool)
}

/// In-memory database with the production schema.
///
/// Limited to one connection: every `sqlite::memory:` connection would
/// otherwise get its own empty database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Create every table and index. Safe to call repeatedly.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pokemons (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            namespace TEXT NOT NULL,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            weight INTEGER NOT NULL,
            height INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE(namespace, name)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Namespace scans back every listing
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_pokemons_namespace ON pokemons(namespace)")
        .execute(pool)
        .await?;

    Ok(())
}
