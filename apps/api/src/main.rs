mod analysis;
mod catalog;
mod config;
mod engine;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyst::{CannedAnalyst, CareerAnalyst, GeminiAnalyst};
use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillSync API v{}", env!("CARGO_PKG_VERSION"));

    // Build the in-memory job catalog
    let catalog = Arc::new(JobCatalog::bundled());
    info!("Job catalog loaded: {} postings", catalog.jobs().len());

    // Select the analyst backend (canned in offline mode — no model calls)
    let analyst: Arc<dyn CareerAnalyst> = if config.offline_mode {
        info!("OFFLINE_MODE set — using the canned analyst");
        Arc::new(CannedAnalyst)
    } else {
        let llm = GeminiClient::new(config.gemini_api_key.clone());
        info!("LLM client initialized (model: {})", llm_client::MODEL);
        Arc::new(GeminiAnalyst::new(llm))
    };

    // Build app state
    let state = AppState {
        catalog,
        analyst,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // frontend dev server origin varies

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
