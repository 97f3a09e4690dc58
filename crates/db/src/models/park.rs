//! Park rows and the assembled park record.

use parksphere_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `parks` table.
#[derive(Debug, Clone, FromRow)]
pub struct ParkRow {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub summary: String,
    pub coordinates_lat: f64,
    pub coordinates_lon: f64,
    pub biome: String,
    pub established: i64,
    pub area_acres: i64,
    /// Raw JSON payload; decoded during assembly.
    pub activities: Option<String>,
    pub climate: Option<String>,
}

// ---------------------------------------------------------------------------
// API models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A displayable photo from a park's gallery.
///
/// Selected straight from `images` with `blur_hash` aliased to `blur`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub blur: String,
    pub attribution: Option<String>,
}

/// A park with its gallery, satellite image and decoded activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub coordinates: Coordinates,
    pub biome: String,
    pub established: i64,
    pub area_acres: i64,
    pub summary: String,
    pub gallery: Vec<GalleryImage>,
    pub satellite: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    pub climate: Option<String>,
}

impl Park {
    /// Combine a park row with its resolved images and decoded activities.
    pub fn from_parts(
        row: ParkRow,
        gallery: Vec<GalleryImage>,
        satellite: Option<String>,
        activities: Vec<String>,
    ) -> Self {
        Self {
            id: row.id,
            name: row.name,
            code: row.code,
            coordinates: Coordinates {
                lat: row.coordinates_lat,
                lon: row.coordinates_lon,
            },
            biome: row.biome,
            established: row.established,
            area_acres: row.area_acres,
            summary: row.summary,
            gallery,
            satellite,
            activities,
            climate: row.climate,
        }
    }
}
