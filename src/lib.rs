pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::CatalogService;
pub use domain::{Book, BookPatch, CatalogError, CatalogResult, NewBook};
pub use infra::client::{CatalogClient, ClientError};
pub use storage::catalog::{CatalogStore, JsonFileStore};
