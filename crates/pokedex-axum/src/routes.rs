//! Route definitions and router construction.
//!
//! `/admin/pokemons` is a static route and wins over the `{namespace}`
//! capture, so a namespace literally called `admin` cannot be listed.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = match config {
        CorsConfig::AllowAll => CorsLayer::new().allow_origin(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new().allow_origin(allowed)
        }
    };
    layer.allow_methods(Any).allow_headers(Any)
}

/// Routes without state applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/admin/pokemons", get(handlers::admin::list_all))
        .route(
            "/{namespace}/pokemons",
            get(handlers::pokemons::list).post(handlers::pokemons::create),
        )
        .route(
            "/{namespace}/pokemons/{name}",
            get(handlers::pokemons::get_one),
        )
}

/// Create the application router with CORS and request tracing.
pub fn create_router(ctx: AxumContext, cors: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    api_routes()
        .with_state(state)
        .layer(build_cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
