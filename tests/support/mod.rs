//! Spawns the real router on an ephemeral port, backed by a temp books file.
#![allow(dead_code)]

use library_catalog::{transport, Book, CatalogService, CatalogStore, JsonFileStore};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestServer {
    pub base_url: String,
    pub books_file: PathBuf,
    server: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn start(books_file: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let catalog = CatalogService::open_json_file(books_file)?;
        Self::serve(catalog, books_file).await
    }

    /// Serves the catalog in `books_file` through a store whose writes always fail.
    pub async fn start_read_only(books_file: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let inner = JsonFileStore::new(books_file);
        inner.ensure_initialized()?;
        let catalog = CatalogService::new(Arc::new(ReadOnlyStore(inner)));
        Self::serve(catalog, books_file).await
    }

    async fn serve(
        catalog: CatalogService,
        books_file: &Path,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let state = transport::http::AppState::new(catalog);
        let app = transport::http::create_app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            books_file: books_file.to_path_buf(),
            server,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Stops the server; the books file stays on disk.
    pub fn stop(self) {
        self.server.abort();
    }
}

/// Reads through to the file, refuses every save.
struct ReadOnlyStore(JsonFileStore);

impl CatalogStore for ReadOnlyStore {
    fn load(&self) -> Vec<Book> {
        self.0.load()
    }

    fn save(&self, _books: &[Book]) -> bool {
        false
    }
}

pub fn books_file_in(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("books.json")
}
