//! Catalog query service.
//!
//! Read operations exposed to the transport layer. Each call is stateless:
//! validate, query through the repositories, assemble every row, return.
//! Any failure while assembling one park fails the whole operation; there
//! are no partial results.

use parksphere_core::catalog::validate_search_query;
use parksphere_core::error::CoreError;
use parksphere_core::types::DbId;

use crate::error::DbResult;
use crate::models::catalog::{BiomeList, ParkList, SearchResults};
use crate::models::park::{Park, ParkRow};
use crate::repositories::ParkRepo;
use crate::DbPool;

/// Stateless entry points over the park repositories.
pub struct CatalogService;

impl CatalogService {
    /// All parks ordered by name, optionally filtered to one biome.
    pub async fn list_parks(pool: &DbPool, biome: Option<&str>) -> DbResult<ParkList> {
        let rows = ParkRepo::find_all(pool, biome).await?;
        let parks = assemble_all(pool, rows).await?;

        tracing::debug!(?biome, total = parks.len(), "Listed parks");

        Ok(ParkList::from(parks))
    }

    /// A single park, or `CoreError::NotFound`.
    pub async fn get_park(pool: &DbPool, id: DbId) -> DbResult<Park> {
        let row = ParkRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Park", id })?;

        tracing::debug!(park_id = id, "Fetched park");

        ParkRepo::assemble(pool, row).await
    }

    /// Alias of [`CatalogService::list_parks`] with a required biome.
    pub async fn get_parks_by_biome(pool: &DbPool, biome: &str) -> DbResult<ParkList> {
        Self::list_parks(pool, Some(biome)).await
    }

    /// Distinct biome values in ascending order.
    pub async fn list_biomes(pool: &DbPool) -> DbResult<BiomeList> {
        let biomes = ParkRepo::distinct_biomes(pool).await?;

        tracing::debug!(total = biomes.len(), "Listed biomes");

        Ok(BiomeList { biomes })
    }

    /// Parks whose name or summary contains `query`.
    ///
    /// Queries shorter than two characters fail with `CoreError::Validation`
    /// before touching the database.
    pub async fn search(pool: &DbPool, query: &str) -> DbResult<SearchResults> {
        validate_search_query(query)?;

        let rows = ParkRepo::find_matching(pool, query).await?;
        let results = assemble_all(pool, rows).await?;
        let total = results.len();

        tracing::debug!(query, total, "Searched parks");

        Ok(SearchResults {
            results,
            query: query.to_string(),
            total,
        })
    }
}

/// Assemble rows one park at a time, preserving row order.
async fn assemble_all(pool: &DbPool, rows: Vec<ParkRow>) -> DbResult<Vec<Park>> {
    let mut parks = Vec::with_capacity(rows.len());
    for row in rows {
        parks.push(ParkRepo::assemble(pool, row).await?);
    }
    Ok(parks)
}
