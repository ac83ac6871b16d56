mod config;
mod errors;
mod extraction;
mod jobs;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::aggregator::JobAggregator;
use crate::jobs::search::AdzunaClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobmatch v{}", env!("CARGO_PKG_VERSION"));

    if !config.adzuna.has_credentials() {
        warn!("ADZUNA_APP_ID / ADZUNA_API_KEY not set; job searches will be rejected upstream");
    }

    let adzuna = AdzunaClient::new(config.adzuna.clone())?;
    info!("Adzuna client initialized ({})", config.adzuna.search_url());

    let state = AppState {
        config: config.clone(),
        aggregator: JobAggregator::new(Arc::new(adzuna)),
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
