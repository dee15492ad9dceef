#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use voicelens_server::{ServiceState, routes};

use crate::config::{Cli, ServerConfig, create_services};

/// Tracing target for startup events.
pub const TRACING_TARGET_STARTUP: &str = "voicelens_cli::startup";

/// Tracing target for shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "voicelens_cli::shutdown";

/// Tracing target for configuration logging.
pub const TRACING_TARGET_CONFIG: &str = "voicelens_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    log_startup_info();

    cli.validate().context("invalid configuration")?;
    cli.log();

    let services = create_services(&cli).context("failed to create service clients")?;
    let state = ServiceState::new(services, cli.pipeline.clone());
    let router = create_router(state, &cli.server);

    server::serve_http(router, cli.server).await?;

    Ok(())
}

/// Creates the router with middleware layers applied.
///
/// Requests time out server-side after the configured request timeout;
/// the trace layer spans every request.
fn create_router(state: ServiceState, server_config: &ServerConfig) -> Router {
    routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server_config.request_timeout()))
}

/// Logs startup information.
fn log_startup_info() {
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting voicelens server"
    );

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        pid = process::id(),
        arch = std::env::consts::ARCH,
        os = std::env::consts::OS,
        "build information"
    );
}
