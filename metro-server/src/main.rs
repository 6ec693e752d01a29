use metro_server::config::ServerConfig;
use metro_server::network::Network;
use metro_server::planner::RouteCosts;
use metro_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();

    // A missing data directory is fatal: never serve an empty network.
    let network = Network::load(&config.lines_dir, &config.excluded_prefix).map_err(|e| {
        error!(error = %e, dir = %config.lines_dir.display(), "failed to load line data");
        e
    })?;

    let state = AppState::new(network, RouteCosts::default());
    let app = create_router(state);

    let addr = config.socket_addr();
    info!(%addr, "Metro route server listening");
    info!("API Endpoints:");
    info!("  GET /lines");
    info!("  GET /stations");
    info!("  GET /stationsByLine?line=");
    info!("  GET /shortestPath?source=&destination=");
    info!("  GET /searchStations?query=");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
