//! Metrics collection and exposition.
//!
//! # Metrics
//! - `resolver_requests_total` (counter): requests by kind and status
//! - `resolver_request_duration_seconds` (histogram): time to response head, by kind

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// What a request turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Welcome page.
    Index,
    /// Import metadata document.
    Meta,
    /// Forwarded to the upstream.
    Proxy,
    /// Path that is not an import path.
    Invalid,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Index => "index",
            RequestKind::Meta => "meta",
            RequestKind::Proxy => "proxy",
            RequestKind::Invalid => "invalid",
        }
    }
}

/// Start the Prometheus scrape endpoint. Must run inside the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(kind: RequestKind, status: u16, start: Instant) {
    ::metrics::counter!(
        "resolver_requests_total",
        "kind" => kind.as_str(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("resolver_request_duration_seconds", "kind" => kind.as_str())
        .record(start.elapsed().as_secs_f64());
}
