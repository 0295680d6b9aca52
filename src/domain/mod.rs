//! Domain types for the book catalog.

pub mod book;
pub mod coerce;
pub mod errors;

pub use book::{Book, BookPatch, NewBook};
pub use errors::{CatalogError, CatalogResult};
