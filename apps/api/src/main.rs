mod auth;
mod config;
mod errors;
mod ingest;
mod models;
mod onboarding;
mod render;
mod routes;
mod screening;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ingest::importer::{DocumentImporter, RemoteDocumentImporter, UnconfiguredImporter};
use crate::ingest::sample::sample_candidates;
use crate::onboarding::provisioning::{AccountProvisioner, LocalProvisioner, RemoteProvisioner};
use crate::routes::build_router;
use crate::state::{AppState, WorkingSet};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener API v{}", env!("CARGO_PKG_VERSION"));

    let importer: Arc<dyn DocumentImporter> = match &config.import_service_url {
        Some(url) => {
            info!("PDF import via {url}");
            Arc::new(RemoteDocumentImporter::new(url.clone(), config.remote_timeout)?)
        }
        None => {
            info!("IMPORT_SERVICE_URL not set, PDF upload disabled");
            Arc::new(UnconfiguredImporter)
        }
    };

    let provisioner: Arc<dyn AccountProvisioner> = match &config.account_service_url {
        Some(url) => {
            info!("Account provisioning via {url} (local fallback)");
            Arc::new(RemoteProvisioner::new(url, config.remote_timeout)?)
        }
        None => Arc::new(LocalProvisioner),
    };

    let working_set = WorkingSet::new(sample_candidates());

    let state = AppState {
        working_set,
        importer,
        provisioner,
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
