//! The Catalog Service.
//!
//! This module sits between the HTTP layer and the catalog store. It is responsible for:
//! 1.  Validating create payloads and coercing them into records.
//! 2.  Translating store outcomes into `CatalogResult`s the transport can map to statuses.
//!
//! The API layer never sees the backing file; swapping `JsonFileStore` for another
//! `CatalogStore` implementation needs no change above this module.

use crate::domain::{Book, BookPatch, CatalogError, CatalogResult, NewBook};
use crate::storage::catalog::{CatalogStore, JsonFileStore};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The main service that manages the book catalog.
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Opens (and if needed initializes) the JSON backing file at `path`.
    pub fn open_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let store = JsonFileStore::new(path.as_ref());
        store.ensure_initialized()?;
        Ok(Self::new(Arc::new(store)))
    }

    pub fn list_books(&self) -> CatalogResult<Vec<Book>> {
        self.store.list()
    }

    pub fn get_book(&self, book_id: &str) -> CatalogResult<Book> {
        self.store
            .find_by_id(book_id)
            .ok_or_else(|| CatalogError::NotFound(book_id.to_string()))
    }

    /// Validates `draft` before touching storage, then inserts it.
    pub fn create_book(&self, draft: NewBook) -> CatalogResult<Book> {
        let book = draft.into_book()?;
        let created = self.store.insert(book)?;
        info!(book_id = %created.book_id, "book created");
        Ok(created)
    }

    pub fn update_book(&self, book_id: &str, patch: &BookPatch) -> CatalogResult<Book> {
        let updated = self.store.update_by_id(book_id, patch)?;
        info!(book_id = %updated.book_id, "book updated");
        Ok(updated)
    }

    pub fn delete_book(&self, book_id: &str) -> CatalogResult<()> {
        self.store.delete_by_id(book_id)?;
        info!(book_id = %book_id, "book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Keeps the catalog in memory so service behaviour can be checked without a file.
    #[derive(Default)]
    struct MemoryStore {
        books: Mutex<Vec<Book>>,
        fail_writes: bool,
    }

    impl CatalogStore for MemoryStore {
        fn load(&self) -> Vec<Book> {
            self.books.lock().unwrap().clone()
        }

        fn save(&self, books: &[Book]) -> bool {
            if self.fail_writes {
                return false;
            }
            *self.books.lock().unwrap() = books.to_vec();
            true
        }
    }

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryStore::default()))
    }

    #[test]
    fn create_then_get_returns_coerced_year() {
        let svc = service();
        let created = svc
            .create_book(NewBook::new("B1", "Dune", "Herbert", "1965"))
            .unwrap();
        assert_eq!(created.publication_year, Some(1965));
        assert_eq!(svc.get_book("B1").unwrap(), created);
        assert!(matches!(svc.get_book("B2"), Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn validation_runs_before_storage() {
        let svc = CatalogService::new(Arc::new(MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        }));
        let err = svc.create_book(NewBook::default()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingFields));

        let err = svc
            .create_book(NewBook::new("B1", "Dune", "Herbert", 1965))
            .unwrap_err();
        assert!(matches!(err, CatalogError::SaveFailed));
        assert!(svc.list_books().unwrap().is_empty());
    }

    #[test]
    fn duplicate_does_not_grow_catalog() {
        let svc = service();
        svc.create_book(NewBook::new("B1", "Dune", "Herbert", 1965))
            .unwrap();
        let err = svc
            .create_book(NewBook::new("B1", "Emma", "Austen", 1815))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
        assert_eq!(svc.list_books().unwrap().len(), 1);
    }

    #[test]
    fn update_and_delete_unknown_ids() {
        let svc = service();
        assert!(matches!(
            svc.update_book("nope", &BookPatch::title("x")),
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_book("nope"),
            Err(CatalogError::NotFound(_))
        ));
    }
}
