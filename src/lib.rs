//! Vanity import path resolver.
//!
//! Serves `go-import`/`go-source` metadata for `/{owner}/{repo}.{tag}` and
//! transparently proxies deeper paths (git smart-HTTP endpoints) to the
//! hosting provider.

pub mod config;
pub mod http;
pub mod import;
pub mod lifecycle;
pub mod observability;
pub mod proxy;

pub use config::ResolverConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
