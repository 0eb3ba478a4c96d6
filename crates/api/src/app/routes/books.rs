use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use bookshelf_books::BookId;
use bookshelf_core::ApiError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
}

/// Parse a path id, mapping malformed values onto the uniform error envelope
/// instead of the framework's plain-text rejection.
fn parse_book_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request().with_detail("invalid book id"))
}

pub async fn list_books(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let books = services
        .books
        .list()
        .iter()
        .map(dto::book_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "books": books }))).into_response()
}

pub async fn get_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_book_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::error_response(e),
    };

    match services.books.get(id) {
        Ok(book) => (
            StatusCode::OK,
            Json(serde_json::json!({ "book": dto::book_to_json(&book) })),
        )
            .into_response(),
        Err(e) => errors::error_response(e),
    }
}

pub async fn create_book(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateBookRequest>,
) -> axum::response::Response {
    let book = match services.books.create(&body.title, &body.author) {
        Ok(b) => b,
        Err(e) => return errors::error_response(e),
    };

    tracing::info!(id = book.id.0, "book created");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Book created successfully",
            "book": dto::book_to_json(&book),
        })),
    )
        .into_response()
}

pub async fn update_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateBookRequest>,
) -> axum::response::Response {
    let id = match parse_book_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::error_response(e),
    };

    let book = match services
        .books
        .update(id, body.title.as_deref(), body.author.as_deref())
    {
        Ok(b) => b,
        Err(e) => return errors::error_response(e),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Book updated successfully",
            "book": dto::book_to_json(&book),
        })),
    )
        .into_response()
}

pub async fn delete_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_book_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::error_response(e),
    };

    let book = match services.books.delete(id) {
        Ok(b) => b,
        Err(e) => return errors::error_response(e),
    };

    tracing::info!(id = book.id.0, "book deleted");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Book deleted successfully",
            "book": dto::book_to_json(&book),
        })),
    )
        .into_response()
}
