mod config;
mod errors;
mod models;
mod roadmap;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::roadmap::catalog::{RoadmapSource, StaticRoadmapCatalog};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Roadmap API v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the roadmap template source once
    let roadmaps: Arc<dyn RoadmapSource> = match &config.roadmap_catalog_path {
        Some(path) => {
            info!("Loading role catalog from {}", path.display());
            Arc::new(StaticRoadmapCatalog::from_path(path)?)
        }
        None => Arc::new(StaticRoadmapCatalog::embedded()?),
    };
    info!(
        "Timeline horizon defaults to {} months",
        config.default_timeline_months
    );

    // Build app state
    let state = AppState {
        roadmaps,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("invalid listen address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
