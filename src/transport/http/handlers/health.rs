use crate::transport::http::types::{MessageBody, API_RUNNING};
use axum::response::IntoResponse;
use axum::Json;

/// Connectivity check. Answers as long as the process accepts connections; the catalog
/// is not touched.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API process is reachable", body = MessageBody)
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    Json(MessageBody::new(API_RUNNING))
}
