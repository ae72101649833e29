//! Mapping of request failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::import::PathError;
use crate::observability::metrics::RequestKind;
use crate::proxy::ProxyError;

/// Everything that can go wrong while answering an import request.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("bad import path: {0}")]
    BadImportPath(#[from] PathError),
    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),
    #[error(transparent)]
    Upstream(#[from] ProxyError),
}

impl ResolveError {
    /// Status sent to the client for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ResolveError::BadImportPath(_) => StatusCode::BAD_REQUEST,
            ResolveError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ResolveError::Upstream(ProxyError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            ResolveError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Metrics bucket the failed request falls into.
    pub fn kind(&self) -> RequestKind {
        match self {
            ResolveError::BadImportPath(_) => RequestKind::Invalid,
            ResolveError::Render(_) => RequestKind::Meta,
            ResolveError::Upstream(_) => RequestKind::Proxy,
        }
    }
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status, "Rejected request");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        (status, format!("{}: {}\n", reason, self)).into_response()
    }
}
