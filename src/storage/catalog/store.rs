//! The `CatalogStore` contract.

use crate::domain::{Book, BookPatch, CatalogError, CatalogResult};

/// Durable storage of the catalog.
///
/// Implementors only provide `load` and `save`; every other operation is a full
/// load -> mutate -> save cycle built on top of them, so no state is kept between calls.
/// Nothing here serializes writers: two overlapping cycles race and the later save wins.
pub trait CatalogStore: Send + Sync {
    /// Reads the whole catalog. Unreadable or malformed content yields an empty catalog.
    fn load(&self) -> Vec<Book>;

    /// Overwrites the stored catalog with `books`. Returns false if the write failed.
    fn save(&self, books: &[Book]) -> bool;

    /// All records in insertion order.
    ///
    /// Backends whose reads can fail surface it here; the default never fails.
    fn list(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.load())
    }

    /// Linear scan for the first record with `book_id`.
    fn find_by_id(&self, book_id: &str) -> Option<Book> {
        self.load().into_iter().find(|b| b.book_id == book_id)
    }

    /// Appends `book`, rejecting an id that is already present.
    fn insert(&self, book: Book) -> CatalogResult<Book> {
        let mut books = self.load();
        if books.iter().any(|b| b.book_id == book.book_id) {
            return Err(CatalogError::DuplicateId(book.book_id));
        }
        books.push(book.clone());
        if !self.save(&books) {
            return Err(CatalogError::SaveFailed);
        }
        Ok(book)
    }

    /// Merges `patch` over the record with `book_id` and returns the result.
    fn update_by_id(&self, book_id: &str, patch: &BookPatch) -> CatalogResult<Book> {
        let mut books = self.load();
        let book = books
            .iter_mut()
            .find(|b| b.book_id == book_id)
            .ok_or_else(|| CatalogError::NotFound(book_id.to_string()))?;
        patch.apply(book);
        let updated = book.clone();
        if !self.save(&books) {
            return Err(CatalogError::SaveFailed);
        }
        Ok(updated)
    }

    /// Removes the record with `book_id`.
    fn delete_by_id(&self, book_id: &str) -> CatalogResult<()> {
        let books = self.load();
        let before = books.len();
        let remaining: Vec<Book> = books.into_iter().filter(|b| b.book_id != book_id).collect();
        if remaining.len() == before {
            return Err(CatalogError::NotFound(book_id.to_string()));
        }
        if !self.save(&remaining) {
            return Err(CatalogError::SaveFailed);
        }
        Ok(())
    }
}
