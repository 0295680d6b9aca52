// src/bin/api_server.rs

use anyhow::Context;
use library_catalog::infra::{config, telemetry};
use library_catalog::transport;
use library_catalog::CatalogService;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    telemetry::init_tracing(config::log_json());

    // --- Catalog Initialization ---
    let books_file = config::books_file();
    let catalog = CatalogService::open_json_file(&books_file)
        .with_context(|| format!("failed to initialize books file {}", books_file.display()))?;
    info!(path = %books_file.display(), "books database ready");

    let app_state = transport::http::AppState::new(catalog);

    // --- API Server Initialization ---
    let addr = format!("{}:{}", config::bind_addr(), config::port());
    let app = transport::http::create_app(app_state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("server is running on http://{}", addr);
    info!("swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received (Ctrl+C)");
    }
}
