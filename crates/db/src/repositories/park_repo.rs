//! Repository for the `parks` table.
//!
//! Row lookups return plain [`ParkRow`]s; [`ParkRepo::assemble`] turns one
//! row into a full [`Park`] by resolving its images and decoding activities.

use parksphere_core::catalog::{decode_activities, like_contains_pattern};
use parksphere_core::types::DbId;

use crate::error::DbResult;
use crate::models::park::{Park, ParkRow};
use crate::repositories::ImageRepo;
use crate::DbPool;

/// Column list for `parks` queries.
const PARK_COLUMNS: &str = "\
    id, code, name, summary, coordinates_lat, coordinates_lon, \
    biome, established, area_acres, activities, climate";

/// Read-only access to park rows.
pub struct ParkRepo;

impl ParkRepo {
    /// All parks ordered by name, optionally restricted to one biome.
    ///
    /// The biome filter is an exact, case-sensitive match on the stored value.
    pub async fn find_all(
        pool: &DbPool,
        biome: Option<&str>,
    ) -> Result<Vec<ParkRow>, sqlx::Error> {
        match biome {
            Some(biome) => {
                let query = format!(
                    "SELECT {PARK_COLUMNS} FROM parks \
                     WHERE biome = ?1 \
                     ORDER BY name, id"
                );
                sqlx::query_as::<_, ParkRow>(&query)
                    .bind(biome)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {PARK_COLUMNS} FROM parks ORDER BY name, id");
                sqlx::query_as::<_, ParkRow>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a park by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<ParkRow>, sqlx::Error> {
        let query = format!("SELECT {PARK_COLUMNS} FROM parks WHERE id = ?1");
        sqlx::query_as::<_, ParkRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Parks whose name or summary contains `needle`, ordered by name.
    ///
    /// Case-insensitive for ASCII per SQLite's `LIKE`. Wildcards in `needle`
    /// are escaped so this is a literal substring filter with no ranking.
    pub async fn find_matching(pool: &DbPool, needle: &str) -> Result<Vec<ParkRow>, sqlx::Error> {
        let pattern = like_contains_pattern(needle);
        let query = format!(
            "SELECT {PARK_COLUMNS} FROM parks \
             WHERE name LIKE ?1 ESCAPE '\\' OR summary LIKE ?1 ESCAPE '\\' \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, ParkRow>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Every distinct biome value, ascending.
    pub async fn distinct_biomes(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT biome FROM parks ORDER BY biome")
            .fetch_all(pool)
            .await
    }

    /// Build the full [`Park`] for one row.
    ///
    /// Issues one gallery query and one satellite query. A malformed
    /// activities payload fails the call with `CoreError::DataCorruption`.
    pub async fn assemble(pool: &DbPool, row: ParkRow) -> DbResult<Park> {
        let activities = decode_activities(row.id, row.activities.as_deref())?;
        let gallery = ImageRepo::fetch_gallery(pool, row.id).await?;
        let satellite = ImageRepo::fetch_satellite(pool, row.id).await?;

        tracing::trace!(
            park_id = row.id,
            gallery = gallery.len(),
            has_satellite = satellite.is_some(),
            "Assembled park",
        );

        Ok(Park::from_parts(row, gallery, satellite, activities))
    }
}
