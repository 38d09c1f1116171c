use demirbas_core::error::ValidationError;

/// Failure of a store operation.
///
/// `Validation` means the submitted draft was rejected before any
/// mutation; `Database` means the persistence medium could not be
/// read or written.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
