//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, panic boundary, tracing)
//!     → request.rs (request ID, dispatch log)
//!     → "/"            → welcome page
//!     → "/{*path}"     → import::ImportRequest::parse
//!         → 2 segments → metadata document (response::html)
//!         → more       → proxy::Upstream::forward → response::relay
//!     → error.rs maps failures to 400/500/502/504
//! ```

pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use error::ResolveError;
pub use request::log_request;
pub use server::{AppState, HttpServer, ServerError};
