use std::any::Any;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ApiError;

/// Logs one line per request and runs the rest of the stack inside a span
/// carrying a fresh correlation id.
pub async fn log_request(request: Request, next: Next) -> Response {
    let correlation_id = Uuid::new_v4().simple().to_string();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    info!(
        event_name = "catalog.request.received",
        correlation_id = %correlation_id,
        method = %request.method(),
        uri = %request.uri(),
        remote_addr = %remote_addr,
        "request received"
    );

    let span = info_span!("request", correlation_id = %correlation_id);
    next.run(request).instrument(span).await
}

/// Turns a handler panic into the generic 500 error body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(event_name = "catalog.request.panic", detail = %detail, "panic recovered");
    ApiError::internal().into_response()
}
