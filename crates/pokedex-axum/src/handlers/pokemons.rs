//! Pokemon handlers - the per-namespace listing, lookup and creation.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use pokedex_core::{Entry, NewPokemon};

use crate::dto::{ListParams, ListResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// One page of the namespace's merged listing.
pub async fn list(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, HttpError> {
    let query = params.query();
    let page = state.service.list(&namespace, &query).await?;
    Ok(Json(ListResponse::from_page(
        page,
        &state.public_base_url,
        &namespace,
        query.search.as_deref(),
    )))
}

/// Look up one pokemon by name.
pub async fn get_one(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<Entry>, HttpError> {
    Ok(Json(state.service.get_one(&namespace, &name).await?))
}

/// Create a local pokemon in the namespace.
pub async fn create(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    body: Result<Json<NewPokemon>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), HttpError> {
    let Json(pokemon) = body?;
    let entry = state.service.create(&namespace, pokemon).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
