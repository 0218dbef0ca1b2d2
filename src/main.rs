// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::digest_service::DigestService;
use crate::application::observation_service::ObservationService;
use crate::application::series_service::SeriesService;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::database::connect_repository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Load configuration
    let settings = load_settings().context("Failed to load configuration")?;

    // Create repository (infrastructure layer)
    let repository = connect_repository(&settings.database).await?;

    // Create services (application layer)
    let series_service = SeriesService::new(repository.clone());
    let observation_service =
        ObservationService::new(repository.clone(), settings.web.channel.clone());
    let digest_service = DigestService::new(
        repository,
        settings.digest.channel.clone(),
        settings.digest.mode,
    );

    tracing::info!(
        "Digest channel {:?} ({:?} mode), web view channel {:?}",
        digest_service.channel(),
        settings.digest.mode,
        observation_service.web_channel()
    );

    // Create application state
    let state = Arc::new(AppState {
        series_service,
        observation_service,
        digest_service,
    });

    // Build router (presentation layer)
    let router = build_router(
        state,
        Duration::from_secs(settings.server.request_timeout_secs),
    );

    // Start server
    let addr: SocketAddr = settings
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {:?}", settings.server.bind))?;
    tracing::info!("Starting fred-series-api on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
