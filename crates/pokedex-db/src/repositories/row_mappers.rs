//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use pokedex_core::{LocalPokemon, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for pokemon queries.
pub const POKEMON_SELECT_COLUMNS: &str =
    "id, namespace, name, type, weight, height, created_at";

/// Parse a stored timestamp: RFC 3339 as written by this crate, or the
/// `datetime('now')` format for rows inserted by hand.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw.trim_end_matches(" UTC"), "%Y-%m-%d %H:%M:%S%.f")
                .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
                .ok()
        })
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Parse a database row into a `LocalPokemon`.
pub fn row_to_pokemon(row: &sqlx::sqlite::SqliteRow) -> Result<LocalPokemon, RepositoryError> {
    let created_at: String = row.try_get("created_at").map_err(storage)?;
    let created_at = parse_datetime(&created_at).ok_or_else(|| {
        RepositoryError::Serialization(format!("invalid created_at timestamp '{created_at}'"))
    })?;

    Ok(LocalPokemon {
        id: row.try_get("id").map_err(storage)?,
        namespace: row.try_get("namespace").map_err(storage)?,
        name: row.try_get("name").map_err(storage)?,
        kind: row.try_get("type").map_err(storage)?,
        weight: row.try_get("weight").map_err(storage)?,
        height: row.try_get("height").map_err(storage)?,
        created_at,
    })
}
