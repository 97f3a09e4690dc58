//! Query parameter types for the catalog handlers.

use serde::Deserialize;

/// `GET /api/parks?biome=`
#[derive(Debug, Deserialize)]
pub struct ParkListParams {
    pub biome: Option<String>,
}

impl ParkListParams {
    /// The biome filter, with an empty value treated as no filter.
    pub fn biome(&self) -> Option<&str> {
        self.biome.as_deref().filter(|b| !b.is_empty())
    }
}

/// `GET /api/search?q=`
///
/// A missing `q` is treated as an empty query so it fails the same length
/// validation instead of producing a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
