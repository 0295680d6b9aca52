//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 1337;
pub const DEFAULT_BOOKS_FILE: &str = "data/books.json";

/// Loads a `.env` file if one is present. Missing files are not an error.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

/// Interface the API listens on (default `0.0.0.0`).
pub fn bind_addr() -> String {
    std::env::var("CATALOG_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string())
}

/// Listen port (default 1337).
pub fn port() -> u16 {
    match std::env::var("CATALOG_PORT") {
        Ok(v) => v.trim().parse::<u16>().unwrap_or_else(|_| {
            warn!(value = %v, "CATALOG_PORT is not a valid port, using {}", DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

/// Location of the backing file. A leading `~` is expanded.
pub fn books_file() -> PathBuf {
    let raw = std::env::var("BOOKS_FILE").unwrap_or_else(|_| DEFAULT_BOOKS_FILE.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Emit logs as JSON lines instead of the human-readable format.
pub fn log_json() -> bool {
    env_bool("CATALOG_LOG_JSON", false)
}

/// Base URL of a running API, used by the `preflight` check.
pub fn api_url() -> String {
    std::env::var("CATALOG_API_URL").unwrap_or_else(|_| format!("http://localhost:{}", port()))
}

fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(v) => match v.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
