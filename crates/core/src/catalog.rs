//! Catalog rules for park listing and search.
//!
//! Lives in `core` so the repository layer and the HTTP adapter agree on the
//! same validation and decoding behaviour.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Image types
// ---------------------------------------------------------------------------

/// `images.type` value for gallery photographs.
pub const IMAGE_TYPE_PHOTO: &str = "photo";

/// `images.type` value for the satellite image.
pub const IMAGE_TYPE_SATELLITE: &str = "satellite";

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Minimum search query length, in characters.
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Reject queries shorter than [`MIN_SEARCH_QUERY_LEN`] characters.
///
/// Length is measured in Unicode scalar values, not bytes, so a two-letter
/// query in any script is accepted.
pub fn validate_search_query(query: &str) -> Result<(), CoreError> {
    if query.chars().count() < MIN_SEARCH_QUERY_LEN {
        return Err(CoreError::Validation(format!(
            "Query must be at least {MIN_SEARCH_QUERY_LEN} characters"
        )));
    }
    Ok(())
}

/// Build a `%...%` pattern matching `needle` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped; the query must
/// declare `ESCAPE '\'` for this to take effect.
pub fn like_contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

/// Decode the stored `activities` column into an ordered tag list.
///
/// Absent, empty and JSON `null` payloads decode to an empty list. Anything
/// else must be a JSON array of strings; otherwise the row is reported as
/// corrupt rather than silently treated as having no activities.
pub fn decode_activities(park_id: DbId, raw: Option<&str>) -> Result<Vec<String>, CoreError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };

    serde_json::from_str::<Option<Vec<String>>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            CoreError::DataCorruption(format!(
                "activities for park {park_id} do not decode as a string list: {e}"
            ))
        })
}
