// server/src/main.rs

// Entry point for the MedTrack clinic server: configuration from the
// environment, one storage engine for the process lifetime, and an axum
// router over it.

mod error;
mod extract;
mod routes;
mod state;

use anyhow::Result;
use log::info;
use tokio::signal::unix::{signal, SignalKind};

use lib::config::AppConfig;
use lib::storage_engine::open_storage;

use crate::state::AppState;

async fn shutdown_signal() {
    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to set up SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to set up SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    info!("starting medtrack server on {}", config.bind_addr);

    let engine = open_storage(&config);
    info!("storage engine: {}", engine.engine_type());
    engine.connect().await?;

    let state = AppState::new(engine.clone(), &config);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    engine.flush().await?;
    info!("medtrack server stopped");
    Ok(())
}
