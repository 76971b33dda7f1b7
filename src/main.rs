use std::sync::Arc;

use anyhow::Context;
use mockable::DefaultClock;
use tareas_server::{
    app_state::{AppState, SharedState},
    data_access::data_context::DataContext,
    settings::Settings,
    telemetry,
    web_api::routes::build_app,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Settings & logging ─────────────────────────────────────
    let settings = Settings::load().context("Failed to load settings")?;
    telemetry::init_tracing(&settings.log).map_err(|e| anyhow::anyhow!(e))?;

    // ── Database ───────────────────────────────────────────────
    let data_context = DataContext::new(&settings.database)
        .with_context(|| format!("Failed to open database {}", settings.database.url))?;
    info!(url = %settings.database.url, "Database ready");

    // ── Shared state ───────────────────────────────────────────
    let state: SharedState = Arc::new(AppState::new(data_context, Arc::new(DefaultClock)));

    // ── Router ─────────────────────────────────────────────────
    let app = build_app(state, &settings.cors)
        .with_context(|| format!("Invalid CORS origin {}", settings.cors.allowed_origin))?;

    // ── Start ──────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind((
        settings.tcp_socket_binding.as_str(),
        settings.tcp_socket_port,
    ))
    .await
    .context("Failed to bind listener")?;
    let addr = listener.local_addr()?;
    info!("Server running on http://{addr}");
    info!("  Tareas: http://{addr}/api/tareas");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
