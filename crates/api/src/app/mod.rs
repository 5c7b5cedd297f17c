//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: operation orchestration (validate, delegate, classify)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use catalogd_infra::ProductStore;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(store: Arc<dyn ProductStore>) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    Router::new()
        .merge(routes::router())
        .layer(Extension(services))
}
