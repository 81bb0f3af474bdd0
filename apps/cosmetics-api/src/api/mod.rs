//! API routes module

pub mod diagnostics;
pub mod health;
pub mod info;

use axum::{Router, routing::get};
use domain_products::{ProductService, handlers};

use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    let service = ProductService::new(state.store.clone());

    Router::new()
        .route("/hello", get(info::hello))
        .merge(handlers::router(service))
}

/// Routes mounted at the root
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(info::root))
        .route("/schema", get(info::schema))
        .route("/test", get(diagnostics::test_database))
        .route("/ready", get(health::readiness_check))
        .with_state(state.clone())
}
