//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum Router: `/` serves the welcome page, every other path
//!   is an import path
//! - Wire up middleware (panic recovery, tracing, request logging)
//! - Serve metadata documents for `/{owner}/{repo}.{tag}`
//! - Forward longer paths to the upstream and relay the answer
//! - Graceful shutdown on the lifecycle signal

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::ResolverConfig;
use crate::http::error::ResolveError;
use crate::http::request::log_request;
use crate::http::response;
use crate::import::{page, ImportRequest};
use crate::observability::metrics::{self, RequestKind};
use crate::proxy::{ProxyError, Upstream};

/// Error type for server construction.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("upstream setup failed: {0}")]
    Upstream(#[from] ProxyError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<Upstream>,
    pub domain: Arc<str>,
}

/// HTTP server for the resolver.
pub struct HttpServer {
    router: Router,
    config: ResolverConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ResolverConfig) -> Result<Self, ServerError> {
        let state = AppState {
            upstream: Arc::new(Upstream::from_config(&config.upstream)?),
            domain: Arc::from(config.vanity.domain.as_str()),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    fn build_router(state: AppState) -> Router {
        let routes = Router::new()
            .route("/", any(index_handler))
            .route("/{*path}", any(import_handler))
            .with_state(state);
        with_middleware(routes)
    }

    /// Serve on `listener` until `shutdown` fires (or its sender is dropped).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            domain = %self.config.vanity.domain,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Outermost first: panic recovery, HTTP trace span, dispatch log.
fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(log_request)),
    )
}

/// Recovery boundary: a panicking handler costs its own request only.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error\n").into_response()
}

async fn index_handler(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let response = match page::render_index(&state.domain) {
        Ok(body) => response::html(body),
        Err(e) => ResolveError::from(e).into_response(),
    };
    metrics::record_request(RequestKind::Index, response.status().as_u16(), start);
    response
}

async fn import_handler(State(state): State<AppState>, request: Request) -> Response {
    let start = Instant::now();
    let (kind, response) = match resolve_import(&state, request).await {
        Ok(done) => done,
        Err(e) => (e.kind(), e.into_response()),
    };
    metrics::record_request(kind, response.status().as_u16(), start);
    response
}

async fn resolve_import(
    state: &AppState,
    request: Request,
) -> Result<(RequestKind, Response), ResolveError> {
    let (parts, body) = request.into_parts();
    let import = ImportRequest::parse(
        parts.uri.path(),
        parts.uri.query(),
        state.upstream.source_host(),
    )?;
    tracing::debug!(
        path = %import.path,
        tag = %import.tag,
        extra = import.extra_segments.len(),
        "Parsed import path"
    );

    if import.is_metadata() {
        let body = page::render_import(&state.domain, &import)?;
        return Ok((RequestKind::Meta, response::html(body)));
    }

    let url = state.upstream.target_url(&import);
    let upstream = state
        .upstream
        .forward(&url, parts.method, &parts.headers, body)
        .await?;
    Ok((RequestKind::Proxy, response::relay(upstream, url)))
}
