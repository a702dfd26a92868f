//! Storefinder Server - store lookup by location

use anyhow::Result;
use storefinder_server::{config::Config, routes, state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefinder_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Create application state
    let state = state::AppState::new(&config)?;
    if config.enable_index_write {
        tracing::info!(
            "Index writes enabled: {} set {:?}",
            state.index.name(),
            config.geo_set
        );
    }

    // Build router
    let cors = routes::cors_layer(config.cors_origins.as_deref());
    let app = routes::create_router_with_cors(state, cors);

    // Start server
    tracing::info!("Starting server on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
