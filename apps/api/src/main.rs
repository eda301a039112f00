mod catalog;
mod config;
mod errors;
mod extraction;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::matching::scorer::KeywordMatchScorer;
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

    info!("Starting Resume Match API v{}", env!("CARGO_PKG_VERSION"));

    // Load the job catalog once; it is never mutated afterwards
    let catalog = JobCatalog::load(config.jobs_catalog_path.as_deref())?;
    match &config.jobs_catalog_path {
        Some(path) => info!("Job catalog loaded from {} ({} jobs)", path.display(), catalog.len()),
        None => info!("Embedded job catalog loaded ({} jobs)", catalog.len()),
    }

    // Lexical scorer: expanded resume set for scoring, raw set for recommendations
    let scorer = Arc::new(KeywordMatchScorer::default());

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
