//! `SQLite` implementation of the `PokemonRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use pokedex_core::{LocalPokemon, NewPokemon, PokemonRepository, RepositoryError};

use super::row_mappers::{POKEMON_SELECT_COLUMNS, row_to_pokemon};

/// `SQLite` implementation of the `PokemonRepository` trait.
pub struct SqlitePokemonRepository {
    pool: SqlitePool,
}

impl SqlitePokemonRepository {
    /// Create a new `SQLite` pokemon repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map `SQLx` errors to `RepositoryError`, surfacing the (namespace, name)
/// uniqueness constraint as `AlreadyExists`.
fn map_sqlx_error(e: sqlx::Error, what: impl FnOnce() -> String) -> RepositoryError {
    if e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        return RepositoryError::AlreadyExists(what());
    }
    RepositoryError::Storage(e.to_string())
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl PokemonRepository for SqlitePokemonRepository {
    async fn count(&self, namespace: &str) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM pokemons WHERE namespace = ?")
            .bind(namespace)
            .fetch_one(&self.pool)
            .await
            .map_err(storage)?;

        let count: i64 = row.try_get("count").map_err(storage)?;
        Ok(count.unsigned_abs())
    }

    async fn list_page(
        &self,
        namespace: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<LocalPokemon>, RepositoryError> {
        let sql = format!(
            "SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons WHERE namespace = ? \
             ORDER BY id DESC LIMIT ? OFFSET ?"
        );
        let rows = sqlx::query(&sql)
            .bind(namespace)
            .bind(to_sql_int(limit))
            .bind(to_sql_int(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_pokemon).collect()
    }

    async fn list_namespace(&self, namespace: &str) -> Result<Vec<LocalPokemon>, RepositoryError> {
        let sql = format!(
            "SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons WHERE namespace = ? ORDER BY id DESC"
        );
        let rows = sqlx::query(&sql)
            .bind(namespace)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_pokemon).collect()
    }

    async fn find_by_name(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<LocalPokemon>, RepositoryError> {
        let sql = format!(
            "SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons WHERE namespace = ? AND name = ?"
        );
        let row = sqlx::query(&sql)
            .bind(namespace)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?;

        row.as_ref().map(row_to_pokemon).transpose()
    }

    async fn create(
        &self,
        namespace: &str,
        pokemon: &NewPokemon,
    ) -> Result<LocalPokemon, RepositoryError> {
        let created_at = Utc::now();
        let weight = pokemon.effective_weight();
        let height = pokemon.effective_height();

        let result = sqlx::query(
            "INSERT INTO pokemons (namespace, name, type, weight, height, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(namespace)
        .bind(&pokemon.name)
        .bind(&pokemon.kind)
        .bind(weight)
        .bind(height)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, || format!("{namespace}/{}", pokemon.name)))?;

        let id = result.last_insert_rowid();
        debug!(namespace, name = %pokemon.name, id, "Inserted pokemon");

        Ok(LocalPokemon {
            id,
            namespace: namespace.to_string(),
            name: pokemon.name.clone(),
            kind: pokemon.kind.clone(),
            weight,
            height,
            created_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<LocalPokemon>, RepositoryError> {
        let sql = format!(
            "SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons ORDER BY namespace ASC, id ASC"
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_pokemon).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqlitePokemonRepository {
        SqlitePokemonRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = repo().await;

        let created = repo
            .create("gym1", &NewPokemon::new("sparky", "electric").with_weight(7))
            .await
            .unwrap();
        assert_eq!(created.weight, 7);
        assert_eq!(created.height, 10);

        let found = repo.find_by_name("gym1", "sparky").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.kind, "electric");
        assert_eq!(found.weight, 7);
        assert_eq!(found.created_at.timestamp(), created.created_at.timestamp());

        assert!(repo.find_by_name("gym2", "sparky").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_zero_measurements_get_defaults() {
        let repo = repo().await;
        let created = repo
            .create(
                "gym1",
                &NewPokemon::new("blob", "normal").with_weight(0).with_height(0),
            )
            .await
            .unwrap();
        assert_eq!((created.weight, created.height), (42, 10));

        let found = repo.find_by_name("gym1", "blob").await.unwrap().unwrap();
        assert_eq!((found.weight, found.height), (42, 10));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_already_exists() {
        let repo = repo().await;
        repo.create("gym1", &NewPokemon::new("sparky", "electric"))
            .await
            .unwrap();

        let err = repo
            .create("gym1", &NewPokemon::new("sparky", "fire"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));

        // Uniqueness is per namespace
        repo.create("gym2", &NewPokemon::new("sparky", "fire"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_namespace_listing_is_newest_first() {
        let repo = repo().await;
        for name in ["a", "b", "c"] {
            repo.create("gym1", &NewPokemon::new(name, "normal"))
                .await
                .unwrap();
        }
        repo.create("other", &NewPokemon::new("z", "normal"))
            .await
            .unwrap();

        let all = repo.list_namespace("gym1").await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
        assert_eq!(repo.count("gym1").await.unwrap(), 3);
        assert_eq!(repo.count("empty").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_page_windows() {
        let repo = repo().await;
        for name in ["a", "b", "c", "d"] {
            repo.create("gym1", &NewPokemon::new(name, "normal"))
                .await
                .unwrap();
        }

        let page = repo.list_page("gym1", 1, 2).await.unwrap();
        let names: Vec<&str> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["c", "b"]);

        assert!(repo.list_page("gym1", 4, 2).await.unwrap().is_empty());
        assert!(repo.list_page("gym1", 0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all_orders_by_namespace() {
        let repo = repo().await;
        repo.create("zeta", &NewPokemon::new("a", "fire"))
            .await
            .unwrap();
        repo.create("alpha", &NewPokemon::new("b", "water"))
            .await
            .unwrap();
        repo.create("alpha", &NewPokemon::new("c", "grass"))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        let keys: Vec<(&str, &str)> = all
            .iter()
            .map(|p| (p.namespace.as_str(), p.name.as_str()))
            .collect();
        assert_eq!(keys, [("alpha", "b"), ("alpha", "c"), ("zeta", "a")]);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_creates_yield_one_winner() {
        let repo = std::sync::Arc::new(repo().await);

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let repo = std::sync::Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create("gym1", &NewPokemon::new("sparky", "electric"))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(RepositoryError::AlreadyExists(_)) => {}
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(repo.count("gym1").await.unwrap(), 1);
    }
}
