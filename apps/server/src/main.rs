//! Event Manager - Web Server Entry Point

use anyhow::Context;
use clap::Parser;
use event_manager::{api::create_router, config::Config, logging, state::AppState};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "event-server")]
#[clap(about = "HTTP API for events, attendees, tasks and users")]
#[clap(version)]
struct Args {
    /// Configuration file (defaults to ./config.toml when present)
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Listen port, overriding the configuration
    #[clap(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config =
        Config::load_from(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let _telemetry_guard =
        logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.logging.deployment_environment,
        "Starting Event Manager"
    );

    let addr = config
        .socket_addr()
        .context("Failed to determine socket address")?;

    tracing::info!(
        listen_addr = %addr,
        store = ?config.store.backend,
        views_dir = %config.server.views_dir.display(),
        "Configuration loaded"
    );

    // An unreachable store is fatal at startup.
    let state = match AppState::new(config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = ?e, "Error connecting to the database");
            std::process::exit(1);
        }
    };

    let app = create_router(state);

    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener on {addr}"))?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server terminated unexpectedly");
        return Err(e.into());
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install SIGTERM handler, using Ctrl+C only");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("SIGINT received, starting graceful shutdown...");
        }
        _ = sigterm.recv() => {
            tracing::info!("SIGTERM received, starting graceful shutdown...");
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
