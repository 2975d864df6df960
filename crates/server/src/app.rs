use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use catalog_db::ProductRepository;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

use crate::{health, middleware, products};

/// Full HTTP surface: catalog routes and health check, wrapped in panic
/// recovery and, outermost, request logging.
pub fn router(repo: Arc<dyn ProductRepository>) -> Router {
    Router::new()
        .merge(products::router(repo))
        .merge(health::router())
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(from_fn(middleware::log_request))
}

pub async fn bind(address: &str) -> std::io::Result<TcpListener> {
    match TcpListener::bind(address).await {
        Ok(listener) => Ok(listener),
        Err(error) => {
            error!(
                event_name = "system.server.bind_failed",
                correlation_id = "bootstrap",
                bind_address = %address,
                error = %error,
                "server failed to start"
            );
            Err(error)
        }
    }
}

/// Serves until Ctrl-C, then drains in-flight requests.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    let local_addr = listener.local_addr()?;
    info!(
        event_name = "system.server.listening",
        correlation_id = "bootstrap",
        bind_address = %local_addr,
        "starting server on {local_addr}"
    );

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(wait_for_shutdown())
        .await
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(
            event_name = "system.server.signal_error",
            correlation_id = "shutdown",
            error = %error,
            "failed to listen for shutdown signal"
        );
        std::future::pending::<()>().await;
    }

    info!(event_name = "system.server.stopping", correlation_id = "shutdown", "shutdown requested");
}
