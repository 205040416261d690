//! HTTP API server.
//!
//! Provides three endpoints:
//! - `/api/check-postal-code` - initial lookup by postal code
//! - `/api/check-with-colonia` - follow-up lookup with a chosen colonia
//! - `/health` - liveness probe
//!
//! CORS is open to any origin; the API is consumed by a browser frontend
//! served from elsewhere.

mod handlers;
mod shutdown;
mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::lookup::LookupService;
use crate::upstream::{FormSubmitter, UpstreamClient};

use handlers::{check_postal_code, check_with_colonia, health_handler};
pub use shutdown::cancel_on_shutdown_signal;
pub use types::{ErrorResponse, HealthResponse};

/// Builds the API router around a lookup service.
pub fn router<S: FormSubmitter + 'static>(service: Arc<LookupService<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/check-postal-code", get(check_postal_code::<S>))
        .route("/api/check-with-colonia", get(check_with_colonia::<S>))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(service)
}

/// Binds `config.socket_addr()` and serves the API until `shutdown` is cancelled.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the address cannot be
/// bound, or the server fails.
pub async fn run_server(config: Config, shutdown: CancellationToken) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", addr, e))?;

    serve(listener, config, shutdown).await
}

/// Serves the API on an already-bound listener until `shutdown` is cancelled.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the server fails.
pub async fn serve(
    listener: TcpListener,
    config: Config,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let upstream =
        UpstreamClient::from_config(&config).context("Failed to initialize HTTP client")?;
    let service = Arc::new(LookupService::new(upstream));
    let app = router(service);

    let local_addr = listener
        .local_addr()
        .context("Failed to read API server address")?;
    info!("API server listening on http://{}/", local_addr);
    info!("  - Lookup: http://{}/api/check-postal-code", local_addr);
    info!("  - Colonia: http://{}/api/check-with-colonia", local_addr);
    info!("  - Upstream: {}", config.upstream_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    info!("API server stopped");
    Ok(())
}
