use parksphere_core::error::CoreError;

/// Error type for repository and catalog operations.
///
/// Domain failures (not found, invalid input, corrupt rows) travel as
/// [`CoreError`]; anything the store itself reports stays a [`sqlx::Error`].
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;
