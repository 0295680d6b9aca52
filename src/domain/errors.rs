//! # Catalog Errors

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    // Client input errors
    #[error("All fields are required")]
    MissingFields,

    #[error("Book ID already exists: {0}")]
    DuplicateId(String),

    #[error("Book not found: {0}")]
    NotFound(String),

    // Storage errors
    #[error("Failed to write the backing file")]
    SaveFailed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in backing file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog task did not complete: {0}")]
    Task(String),
}

impl CatalogError {
    /// True for errors caused by the request rather than by storage.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingFields | CatalogError::DuplicateId(_) | CatalogError::NotFound(_)
        )
    }
}
