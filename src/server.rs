use anyhow::Result;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    handlers,
    metrics,
    middleware::track_requests,
    work::WorkSimulator,
};

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    pub metrics_handle: Arc<PrometheusHandle>,
    pub simulator: Arc<WorkSimulator>,
}

/// Start the demo service
///
/// This function:
/// 1. Installs the Prometheus recorder
/// 2. Builds the work simulator from config
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown on ctrl-c
pub async fn start_server(config: Config) -> Result<()> {
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics());

    let simulator = Arc::new(WorkSimulator::new(&config.work));

    let state = AppState {
        metrics_handle,
        simulator,
    };

    let app = create_router(state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting demo service on {}", addr);
    info!(
        "Work simulation: delay {}..{}s, error rate {}",
        config.work.min_delay_seconds, config.work.max_delay_seconds, config.work.error_rate
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and the timing middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::health::health_check))
        .route("/simulate-work", get(handlers::work::simulate_work))
        .route("/metrics", get(handlers::metrics_handler::metrics))
        .with_state(state)
        .layer(axum::middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, draining connections...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkConfig;

    #[tokio::test]
    async fn test_create_router() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let state = AppState {
            metrics_handle: Arc::new(recorder.handle()),
            simulator: Arc::new(WorkSimulator::new(&WorkConfig::default())),
        };

        let _app = create_router(state);
        // Router created successfully - no panic
    }
}
