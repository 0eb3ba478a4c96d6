use axum::Json;
use axum::response::IntoResponse;

use bookshelf_core::ApiError;

/// Translate a catalog error into its HTTP response.
///
/// The only path errors take to the wire: status and body come straight from
/// the error, and the error's own headers are written after assembly so they
/// win over framework defaults on collision. Translation cannot fail and does
/// not log.
pub fn error_response(err: ApiError) -> axum::response::Response {
    let mut response = (err.status(), Json(err.to_body())).into_response();

    for (name, value) in err.headers() {
        response.headers_mut().insert(name, value.clone());
    }

    response
}
