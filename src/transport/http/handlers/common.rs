use crate::app::catalog_service::CatalogService;
use crate::domain::{CatalogError, CatalogResult};
use crate::transport::http::types::{
    AppState, ErrorBody, ERR_DUPLICATE_ID, ERR_MISSING_FIELDS, ERR_NOT_FOUND, ERR_SERVER,
};
use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, error};

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Maps a catalog outcome to its status and `{ "error": ... }` body.
///
/// `save_failed` is the operation-specific message used when the backing file could not be
/// written.
pub fn catalog_error_response(err: CatalogError, save_failed: &str) -> Response {
    if err.is_client_error() {
        debug!(error = %err, "request rejected");
    } else {
        error!(error = %err, "catalog operation failed");
    }
    match err {
        CatalogError::MissingFields => error_response(StatusCode::BAD_REQUEST, ERR_MISSING_FIELDS),
        CatalogError::DuplicateId(_) => error_response(StatusCode::BAD_REQUEST, ERR_DUPLICATE_ID),
        CatalogError::NotFound(_) => error_response(StatusCode::NOT_FOUND, ERR_NOT_FOUND),
        CatalogError::SaveFailed => error_response(StatusCode::INTERNAL_SERVER_ERROR, save_failed),
        CatalogError::Io(_) | CatalogError::Json(_) | CatalogError::Task(_) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, ERR_SERVER)
        }
    }
}

/// Runs `op` against the catalog on the blocking pool.
///
/// The store does synchronous file I/O, so it must not run on a runtime worker. The catalog
/// lock is held until `op` returns.
pub async fn with_catalog<T, F>(state: &AppState, op: F) -> CatalogResult<T>
where
    F: FnOnce(&CatalogService) -> CatalogResult<T> + Send + 'static,
    T: Send + 'static,
{
    let catalog = state.catalog.clone().lock_owned().await;
    tokio::task::spawn_blocking(move || op(&*catalog))
        .await
        .map_err(|e| CatalogError::Task(e.to_string()))?
}

/// Reads a request body as a JSON object.
///
/// A body sent without a JSON content type, an empty body and a JSON value that is not an
/// object are all read as `{}`. Only a JSON body that does not parse is answered with 400.
pub fn parse_body<T: DeserializeOwned + Default>(
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<T, Response> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: JsonValue = serde_json::from_slice(body).map_err(invalid_body)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(invalid_body)
}

fn invalid_body(err: serde_json::Error) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        &format!("Invalid JSON body: {}", err),
    )
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(mime) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
    else {
        return false;
    };
    let mime = mime.trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
