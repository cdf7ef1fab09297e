//! Chatrooms application composition root
//!
//! Wires the store, the chatbot relay, and the domain routers into a single
//! application.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use chatrooms_common::config::Config;
use chatrooms_relay::{ChatbotRelay, RelayConfig, RelayServiceFactory};
use chatrooms_rooms::{ConversationService, RoomsRepositories, RoomsState};
use sqlx::SqlitePool;

/// Create the main application router from configuration
pub fn create_app(config: &Config, pool: SqlitePool) -> Result<Router, anyhow::Error> {
    let relay_config = RelayConfig {
        provider: config.relay_provider.clone(),
        timeout: Duration::from_secs(config.relay_timeout_secs),
    };
    let relay = RelayServiceFactory::create(relay_config)?;

    tracing::info!(
        provider = %config.relay_provider,
        timeout_secs = config.relay_timeout_secs,
        "Chatbot relay configured"
    );

    Ok(router(pool, Arc::from(relay)))
}

/// Build the router around an explicit relay implementation
pub fn router(pool: SqlitePool, relay: Arc<dyn ChatbotRelay>) -> Router {
    let repos = RoomsRepositories::new(pool);
    let rooms_state = RoomsState {
        service: ConversationService::new(Arc::new(repos), relay),
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Chatrooms API v0.0.1-SNAPSHOT" }),
        )
        .merge(chatrooms_rooms::routes().with_state(rooms_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
