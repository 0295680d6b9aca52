//! Catalog persisted as a single pretty-printed JSON array on disk.

use crate::domain::{Book, CatalogError, CatalogResult};
use crate::storage::catalog::store::CatalogStore;
use serde_json::Value as JsonValue;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Backing-file store. Every call goes to disk; nothing is cached.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Prepares the backing file at process start.
    ///
    /// Creates the parent directory and an empty array if the file is missing. Content that
    /// is not a JSON array, or not JSON at all, is replaced with an empty array.
    pub fn ensure_initialized(&self) -> CatalogResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if !self.path.exists() {
            debug!(path = %self.path.display(), "creating empty books file");
            return self.write_all(&[]);
        }

        match self.read_value() {
            Ok(JsonValue::Array(_)) => Ok(()),
            Ok(_) => {
                warn!(path = %self.path.display(), "books file is not an array, resetting to empty array");
                self.write_all(&[])
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "error reading books file, resetting to empty array");
                self.write_all(&[])
            }
        }
    }

    fn read_value(&self) -> CatalogResult<JsonValue> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn try_load(&self) -> CatalogResult<Vec<Book>> {
        match self.read_value()? {
            JsonValue::Array(items) => {
                let mut books = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    match Book::try_from(item) {
                        Ok(book) => books.push(book),
                        Err(reason) => {
                            warn!(path = %self.path.display(), index, %reason, "skipping books file entry");
                        }
                    }
                }
                Ok(books)
            }
            _ => {
                warn!(path = %self.path.display(), "books file data is not an array, returning empty array");
                Ok(Vec::new())
            }
        }
    }

    fn write_all(&self, books: &[Book]) -> CatalogResult<()> {
        let mut out = serde_json::to_string_pretty(books)?;
        out.push('\n');
        fs::write(&self.path, out)?;
        Ok(())
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Vec<Book> {
        match self.try_load() {
            Ok(books) => books,
            Err(CatalogError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                if let Err(e) = self.write_all(&[]) {
                    error!(path = %self.path.display(), error = %e, "error initializing books file");
                }
                Vec::new()
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "error reading books file");
                Vec::new()
            }
        }
    }

    fn save(&self, books: &[Book]) -> bool {
        match self.write_all(books) {
            Ok(()) => true,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "error writing books file");
                false
            }
        }
    }
}
