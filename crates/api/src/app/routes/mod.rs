use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/api/products", products::router())
}
