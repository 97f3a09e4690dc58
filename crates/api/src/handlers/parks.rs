//! Handlers for the park catalog.
//!
//! Thin adapters over [`CatalogService`]: extract parameters, delegate, and
//! return the service's result as JSON. All endpoints are public and
//! read-only.

use axum::extract::{Path, Query, State};
use axum::Json;
use parksphere_core::types::DbId;
use parksphere_db::catalog::CatalogService;
use parksphere_db::models::catalog::{BiomeList, ParkList, SearchResults};
use parksphere_db::models::park::Park;

use crate::error::AppResult;
use crate::query::{ParkListParams, SearchParams};
use crate::state::AppState;

/// GET /api/parks
///
/// List all parks ordered by name, optionally filtered with `?biome=`.
pub async fn list_parks(
    State(state): State<AppState>,
    Query(params): Query<ParkListParams>,
) -> AppResult<Json<ParkList>> {
    let list = CatalogService::list_parks(&state.pool, params.biome()).await?;
    Ok(Json(list))
}

/// GET /api/parks/{id}
pub async fn get_park(
    State(state): State<AppState>,
    Path(park_id): Path<DbId>,
) -> AppResult<Json<Park>> {
    let park = CatalogService::get_park(&state.pool, park_id).await?;
    Ok(Json(park))
}

/// GET /api/parks/biome/{biome}
pub async fn get_parks_by_biome(
    State(state): State<AppState>,
    Path(biome): Path<String>,
) -> AppResult<Json<ParkList>> {
    let list = CatalogService::get_parks_by_biome(&state.pool, &biome).await?;
    Ok(Json(list))
}

/// GET /api/biomes
pub async fn list_biomes(State(state): State<AppState>) -> AppResult<Json<BiomeList>> {
    let biomes = CatalogService::list_biomes(&state.pool).await?;
    Ok(Json(biomes))
}

/// GET /api/search
///
/// Substring search over park names and summaries. Queries shorter than
/// two characters are rejected with 400.
pub async fn search_parks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResults>> {
    let results = CatalogService::search(&state.pool, &params.q).await?;
    Ok(Json(results))
}
