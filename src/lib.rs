use std::sync::Arc;

use tokio::net::TcpListener;

mod app;
mod application;
mod domain;
mod infrastructure;
mod presentation;

use app::AppState;
use infrastructure::config::AppConfig;
use infrastructure::logging::logger;
use presentation::router::build_router;

pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::from_env()?;

    if let Err(error) = logger::init_logger(&config) {
        eprintln!("Failed to initialize logger: {}", error);
    }

    tracing::info!(
        "Starting {} v{} in {} environment",
        config.app_name,
        config.app_version,
        config.environment
    );

    let state = Arc::new(AppState::new(config));
    let bind_addr = state.config.bind_addr();
    let router = build_router(state);

    let listener = TcpListener::bind(&bind_addr).await.map_err(|error| {
        tracing::error!("Failed to bind {}: {}", bind_addr, error);
        error
    })?;
    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", error);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
