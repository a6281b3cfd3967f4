//! CLARP Terminal API Server
//!
//! REST API for entity resolution, project lookup and LARP scoring
//!
//! Usage:
//!   cargo run --bin clarp_api
//!
//! Environment:
//!   PORT / CLARP_PORT    - Server port (default: 8080)
//!   CLARP_HOST           - Server host (default: 0.0.0.0)
//!   CLARP_CACHE_TTL_SECS - Score cache TTL (default: 300)
//!   CLARP_TELEMETRY_DIR  - Where shutdown stats are written (default: ./telemetry)
//!   RUST_LOG             - Log filter (default: info)

use clarp_terminal::api::{create_router, AppState};
use clarp_terminal::utils::constants::{APP_NAME, APP_VERSION};
use clarp_terminal::{InMemoryCatalog, ServerConfig, TelemetryCollector};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    print_banner();

    let config = ServerConfig::from_env()?;
    let addr = config.listen_addr()?;

    let telemetry = Arc::new(TelemetryCollector::with_export_dir(
        config.telemetry_dir.clone(),
    ));
    let telemetry_for_shutdown = telemetry.clone();

    let catalog = Arc::new(InMemoryCatalog::seeded());
    let state = Arc::new(AppState::new(catalog, telemetry, config.cache_ttl_secs));
    let app = create_router(state);

    info!("🚀 {} API starting on http://{}", APP_NAME, addr);
    info!("Endpoints:");
    info!("  GET  /v1/health          - Health check");
    info!("  GET  /v1/stats           - Usage & cache statistics");
    info!("  GET  /v1/resolve?q=      - Classify a query");
    info!("  GET  /v1/search?q=       - Resolve and score matches");
    info!("  GET  /v1/projects        - Tracked projects");
    info!("  GET  /v1/projects/:id    - Project detail with LARP score");
    info!("  POST /v1/score           - Score an ad-hoc signal bundle");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🛑 Shutdown signal received, cleaning up...");

    let stats = telemetry_for_shutdown.get_stats();
    info!("   Total searches: {}", stats.total_searches);
    info!("   Unresolved: {}", stats.unresolved_searches);
    info!("   Scores computed: {}", stats.total_scored);
    info!("   Flagged rate: {:.1}%", stats.flagged_rate());

    match telemetry_for_shutdown.export_stats_json() {
        Ok(path) => info!("   ✅ Stats exported to: {}", path.display()),
        Err(e) => warn!("   ⚠️ Failed to export stats: {}", e),
    }

    info!("👋 {} API shutdown complete", APP_NAME);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}

fn print_banner() {
    println!(
        r#"
    +--------------------------------------------------+
    |                                                  |
    |    ___ _      _   ___ ___                        |
    |   / __| |    /_\ | _ \ _ \                       |
    |  | (__| |__ / _ \|   /  _/                       |
    |   \___|____/_/ \_\_|_\_|     T E R M I N A L     |
    |                                                  |
    |          LARP detection API  v{:<8}           |
    |                                                  |
    +--------------------------------------------------+
    "#,
        APP_VERSION
    );
}
