//! Transparent forwarding to the hosting provider.
//!
//! # Data Flow
//! ```text
//! ImportRequest (extra segments present)
//!     → target_url: {base}/{owner}/{repo}.git/{extra}[?query]
//!     → headers.rs (forward_headers)
//!     → shared reqwest client (POST body streamed, others bodiless)
//!     → http/response.rs relays status, headers and body stream
//! ```
//!
//! # Design Decisions
//! - One client for the whole process, built once and shared via `Arc`
//! - No retries; a failed send surfaces as 502
//! - Timeouts are opt-in; the response body stream is never bounded

pub mod headers;

use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderMap, Method};
use url::Url;

use crate::config::UpstreamConfig;
use crate::import::ImportRequest;

/// Errors talking to the hosting provider.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid upstream base URL '{0}'")]
    BaseUrl(String),
    #[error("failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to build upstream request for {url}: {source}")]
    Build {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("upstream request to {url} failed: {source}")]
    Send {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("upstream {url} did not respond within {after:?}")]
    Timeout { url: String, after: Duration },
}

/// Handle on the hosting provider.
pub struct Upstream {
    client: reqwest::Client,
    base_url: Url,
    source_host: String,
    response_timeout: Option<Duration>,
    strip_hop_by_hop: bool,
}

impl Upstream {
    /// Build the shared client from configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|_| ProxyError::BaseUrl(config.base_url.clone()))?;
        let host = base_url
            .host_str()
            .ok_or_else(|| ProxyError::BaseUrl(config.base_url.clone()))?;
        let source_host = match base_url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(ProxyError::Client)?;

        Ok(Self {
            client,
            base_url,
            source_host,
            response_timeout: config.response_timeout_secs.map(Duration::from_secs),
            strip_hop_by_hop: config.strip_hop_by_hop,
        })
    }

    /// Host (with non-default port) serving browsable source.
    pub fn source_host(&self) -> &str {
        &self.source_host
    }

    /// Repository URL for a sub-resource request.
    pub fn target_url(&self, request: &ImportRequest) -> String {
        // Url keeps a trailing '/' on a bare authority.
        let mut url = format!(
            "{}{}.git/{}",
            self.base_url.as_str(),
            request.path,
            request.extra_path()
        );
        if let Some(query) = &request.raw_query {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// Send the request to `url` and wait for the response head.
    ///
    /// Only POST carries its body; every other method is forwarded bodiless.
    pub async fn forward(
        &self,
        url: &str,
        method: Method,
        incoming: &HeaderMap,
        body: Body,
    ) -> Result<reqwest::Response, ProxyError> {
        tracing::info!(url = %url, method = %method, "Proxying request");
        tracing::debug!(headers = ?incoming, "Proxy request headers");

        let forward_body = method == Method::POST;
        let mut builder = self
            .client
            .request(method, url)
            .headers(headers::forward_headers(incoming, self.strip_hop_by_hop));
        if forward_body {
            builder = builder.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }
        let outbound = builder.build().map_err(|source| ProxyError::Build {
            url: url.to_string(),
            source,
        })?;

        let sent = match self.response_timeout {
            Some(after) => tokio::time::timeout(after, self.client.execute(outbound))
                .await
                .map_err(|_| ProxyError::Timeout {
                    url: url.to_string(),
                    after,
                })?,
            None => self.client.execute(outbound).await,
        };
        let response = sent.map_err(|source| ProxyError::Send {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!(
            status = %response.status(),
            headers = ?response.headers(),
            "Proxy response headers"
        );
        Ok(response)
    }
}
