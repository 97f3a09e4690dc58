//! Collection envelopes returned by the catalog service.

use serde::{Deserialize, Serialize};

use crate::models::park::Park;

/// `{ parks, total }` for list and biome-filter operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkList {
    pub parks: Vec<Park>,
    pub total: usize,
}

impl From<Vec<Park>> for ParkList {
    fn from(parks: Vec<Park>) -> Self {
        let total = parks.len();
        Self { parks, total }
    }
}

/// `{ results, query, total }` for search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<Park>,
    /// The query as received, echoed back to the caller.
    pub query: String,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomeList {
    pub biomes: Vec<String>,
}
