use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Stored data that cannot be decoded into its domain shape.
    #[error("Data corruption: {0}")]
    DataCorruption(String),
}
