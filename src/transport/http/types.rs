use crate::app::catalog_service::CatalogService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

/// Shared handler state.
///
/// The service sits behind one async mutex, so load -> mutate -> save cycles from this
/// process never interleave. Other processes writing the same file are not coordinated.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Mutex<CatalogService>>,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }
}

/// `{ "message": "..." }`
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "error": "..." }`
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub const API_RUNNING: &str = "Library API is running";
pub const BOOK_DELETED: &str = "Book deleted successfully";

pub const ERR_MISSING_FIELDS: &str = "All fields are required";
pub const ERR_DUPLICATE_ID: &str = "Book ID already exists";
pub const ERR_NOT_FOUND: &str = "Book not found";
pub const ERR_SAVE_BOOK: &str = "Failed to save book";
pub const ERR_UPDATE_BOOK: &str = "Failed to update book";
pub const ERR_DELETE_BOOK: &str = "Failed to delete book";
pub const ERR_SERVER: &str = "Server error";
