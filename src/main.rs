//! Ink Bloom Engine - Backend API for teaser scene breakdowns
//!
//! The Engine is the backend server that:
//! - Classifies teasers as story / non-story with a language model
//! - Breaks story teasers down into characters, setting, mood, camera and actions
//! - Generates styled images for a scene via the image API
//! - Keeps a per-session style context so images stay visually consistent

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkbloom_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ink Bloom Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  API: {}", config.openai_base_url);
    tracing::info!("  Chat model: {}", config.chat_model);
    tracing::info!("  Image model: {}", config.image_model);

    // Initialize application state
    let state = Arc::new(AppState::new(config));
    tracing::info!("Application state initialized");

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server_port));
    let app = http::build_app(state);

    // Start the server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
