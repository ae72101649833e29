//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init tracing/metrics → Bind → Serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs) → Shutdown::trigger (shutdown.rs)
//!     → axum stops accepting → in-flight requests drain → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
