use axum::{Router, routing::get};

pub mod books;
pub mod system;

/// Router for every endpoint the server exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/protected", get(system::protected))
        .route("/custom-error", get(system::custom_error))
        .nest("/books", books::router())
}
