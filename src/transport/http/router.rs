use crate::domain::{Book, BookPatch, NewBook};
use crate::transport::http::handlers::{books, health};
use crate::transport::http::types::{AppState, ErrorBody, MessageBody};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root_handler,
        books::list_books_handler,
        books::get_book_handler,
        books::create_book_handler,
        books::update_book_handler,
        books::delete_book_handler
    ),
    components(schemas(Book, NewBook, BookPatch, MessageBody, ErrorBody))
)]
pub struct ApiDoc;

/// Catalog routes only. `/bookGet` and `/bookAdd` are aliases kept for older clients.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route(
            "/books",
            get(books::list_books_handler).post(books::create_book_handler),
        )
        .route(
            "/books/:id",
            get(books::get_book_handler)
                .put(books::update_book_handler)
                .delete(books::delete_book_handler),
        )
        .route("/bookGet", get(books::list_books_handler))
        .route("/bookAdd", post(books::create_book_handler))
        .with_state(app_state)
}

/// Full application: routes, Swagger UI, permissive CORS and request tracing.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
