//! Admin handlers - cross-namespace views of the local store.

use axum::Json;
use axum::extract::State;
use pokedex_core::LocalPokemon;

use crate::error::HttpError;
use crate::state::AppState;

/// Every locally created pokemon, ordered by namespace.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<LocalPokemon>>, HttpError> {
    Ok(Json(state.service.list_all_local().await?))
}
