//! Per-request identification and dispatch logging.
//!
//! Every request gets a UUID v4 recorded on the span wrapping the handler.
//! The id stays out of forwarded and relayed headers.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

/// Log method and path, then hand the request on inside its own span.
pub async fn log_request(request: Request, next: Next) -> Response {
    let span = tracing::info_span!("request", request_id = %Uuid::new_v4());
    async move {
        tracing::info!(
            method = %request.method(),
            path = %request.uri().path(),
            "Dispatching request"
        );
        next.run(request).await
    }
    .instrument(span)
    .await
}
