//! Readiness endpoint

use axum::{Json, extract::State, http::StatusCode};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

/// Readiness check - the document store must be connected and answering
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let store = state.store.clone();
    let database: HealthCheckFuture<'_> = Box::pin(async move {
        store
            .collections()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    });

    run_health_checks(vec![("database", database)]).await
}
