//! Route definitions for the park catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::parks;
use crate::state::AppState;

/// Park routes mounted at `/parks`.
///
/// ```text
/// GET /                 -> list_parks (?biome=)
/// GET /{id}             -> get_park
/// GET /biome/{biome}    -> get_parks_by_biome
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(parks::list_parks))
        .route("/{id}", get(parks::get_park))
        .route("/biome/{biome}", get(parks::get_parks_by_biome))
}
