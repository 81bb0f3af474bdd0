//! Database diagnostics endpoint

use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Connection report for operators
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    /// Whether `DATABASE_URL` is set
    pub database_url: String,
    /// Whether `DATABASE_NAME` is set
    pub database_name: String,
    pub connection_status: String,
    /// First ten collection names
    pub collections: Vec<String>,
}

fn env_flag(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

/// Report store availability and list collections
///
/// Always 200; failures are described in the body.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Info",
    responses((status = 200, description = "Diagnostics report", body = DiagnosticsResponse))
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "⚠️  Available but not initialized".to_string(),
        database_url: env_flag(state.config.database_url_set),
        database_name: env_flag(state.config.database_name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if state.store.is_available() {
        response.connection_status = "Connected".to_string();
        match state.store.collections().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                response.collections = names;
                response.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                let detail: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
                tracing::warn!(error = %e, "Listing collections failed");
                response.database = format!("⚠️  Connected but Error: {}", detail);
            }
        }
    }

    Json(response)
}
