use crate::domain::{Book, BookPatch, NewBook};
use crate::transport::http::handlers::common::{catalog_error_response, parse_body, with_catalog};
use crate::transport::http::types::{
    AppState, ErrorBody, MessageBody, BOOK_DELETED, ERR_DELETE_BOOK, ERR_SAVE_BOOK, ERR_SERVER,
    ERR_UPDATE_BOOK,
};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "All books in insertion order (possibly empty)", body = [Book]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_books_handler(State(state): State<AppState>) -> impl IntoResponse {
    match with_catalog(&state, |catalog| catalog.list_books()).await {
        Ok(books) => Json(books).into_response(),
        Err(e) => catalog_error_response(e, ERR_SERVER),
    }
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    params(
        ("id" = String, Path, description = "Book id (e.g. B1)")
    ),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 404, description = "No book with this id", body = ErrorBody)
    )
)]
pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> impl IntoResponse {
    match with_catalog(&state, move |catalog| catalog.get_book(&book_id)).await {
        Ok(book) => Json(book).into_response(),
        Err(e) => catalog_error_response(e, ERR_SERVER),
    }
}

#[utoipa::path(
    post,
    path = "/books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created (year coerced to an integer)", body = Book),
        (status = 400, description = "Missing field, duplicate id or malformed body", body = ErrorBody),
        (status = 500, description = "Failed to save book", body = ErrorBody)
    )
)]
pub async fn create_book_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let draft: NewBook = match parse_body(&headers, &body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match with_catalog(&state, move |catalog| catalog.create_book(draft)).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => catalog_error_response(e, ERR_SAVE_BOOK),
    }
}

#[utoipa::path(
    put,
    path = "/books/{id}",
    params(
        ("id" = String, Path, description = "Book id (e.g. B1)")
    ),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "No book with this id", body = ErrorBody),
        (status = 500, description = "Failed to update book", body = ErrorBody)
    )
)]
pub async fn update_book_handler(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let patch: BookPatch = match parse_body(&headers, &body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match with_catalog(&state, move |catalog| catalog.update_book(&book_id, &patch)).await {
        Ok(book) => Json(book).into_response(),
        Err(e) => catalog_error_response(e, ERR_UPDATE_BOOK),
    }
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(
        ("id" = String, Path, description = "Book id (e.g. B1)")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageBody),
        (status = 404, description = "No book with this id", body = ErrorBody),
        (status = 500, description = "Failed to delete book", body = ErrorBody)
    )
)]
pub async fn delete_book_handler(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> impl IntoResponse {
    match with_catalog(&state, move |catalog| catalog.delete_book(&book_id)).await {
        Ok(()) => Json(MessageBody::new(BOOK_DELETED)).into_response(),
        Err(e) => catalog_error_response(e, ERR_DELETE_BOOK),
    }
}
