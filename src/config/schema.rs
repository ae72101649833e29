//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section falls back to its defaults, so an empty file describes the
//! stock deployment: port 8080, the `hudu.co` domain and GitHub upstream.

use serde::{Deserialize, Serialize};

/// Root configuration for the resolver.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Vanity domain served to tooling clients.
    pub vanity: VanityConfig,

    /// Hosting provider the import paths resolve to.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Vanity domain configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VanityConfig {
    /// Domain prefixed to every module path (e.g., "hudu.co").
    pub domain: String,
}

impl Default for VanityConfig {
    fn default() -> Self {
        Self {
            domain: "hudu.co".to_string(),
        }
    }
}

/// Upstream hosting provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Scheme and authority of the provider (e.g., "https://github.com").
    pub base_url: String,

    /// Connection establishment timeout in seconds. Unset means no timeout.
    pub connect_timeout_secs: Option<u64>,

    /// Time allowed for the upstream to produce response headers, in seconds.
    /// Unset means no timeout. Body streaming is never bounded.
    pub response_timeout_secs: Option<u64>,

    /// Drop hop-by-hop headers before forwarding. Off by default: requests are
    /// forwarded with their headers intact.
    pub strip_hop_by_hop: bool,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` for outbound requests.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://github.com".to_string(),
            connect_timeout_secs: None,
            response_timeout_secs: None,
            strip_hop_by_hop: false,
            use_system_proxy: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
