pub mod health;
pub mod parks;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                    service + database health
/// /parks                     list (?biome=)
/// /parks/{id}                single park
/// /parks/biome/{biome}       list by biome
/// /biomes                    distinct biomes
/// /search                    substring search (?q=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/parks", parks::router())
        .route("/biomes", get(handlers::parks::list_biomes))
        .route("/search", get(handlers::parks::search_parks))
}
