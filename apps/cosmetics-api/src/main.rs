//! Cosmetics API - REST catalog server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::DocumentStore;
use database::document::MongoDocumentStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if let Some(mongodb) = &config.mongodb {
        info!("Connecting to MongoDB at {}", mongodb.redacted_url());
    }

    // A missing or unreachable database leaves the store unavailable; the
    // server still starts.
    let store = MongoDocumentStore::connect(config.mongodb.as_ref()).await;
    if let Some(name) = store.database_name() {
        info!("Document store ready on database: {}", name);
    }

    let state = AppState::new(config, Arc::new(store));

    let router = axum_helpers::create_router::<openapi::ApiDoc>(
        api::root_routes(&state),
        api::routes(&state),
    )?;
    let app = router.merge(health_router(state.config.app));

    info!("Starting Cosmetics API with production-ready shutdown (30s timeout)");

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: releasing document store");
        // The driver closes pooled connections once the last handle drops
        drop(state);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Cosmetics API shutdown complete");
    Ok(())
}
