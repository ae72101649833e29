//! Import path parsing.
//!
//! A vanity import path has the shape `/{owner}/{repo}.{tag}[/extra...]`.
//! The first two segments name the repository and the version tag; anything
//! after them is a sub-resource that gets proxied to the hosting provider
//! (git's smart-HTTP endpoints, for instance).
//!
//! ```text
//! /miolini/meshbird.v0.2/info/refs?service=git-upload-pack
//!  └─────┬─────┘ └─┬─┘ └────┬────┘ └─────────┬─────────┘
//!      path       tag   extra_segments      raw_query
//! ```

pub mod page;

/// Version control system advertised in the `go-import` tag.
pub const SCM: &str = "git";

/// Why an incoming path is not an import path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("expected /owner/repo.tag, got {0} segment(s)")]
    TooFewSegments(usize),
    #[error("no '.' separating repository from tag in '{0}'")]
    MissingTag(String),
}

/// One parsed import request. Lives for the duration of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// Version control system, always [`SCM`].
    pub scm: &'static str,
    /// Host serving the repository's browsable source (e.g., "github.com").
    pub host: String,
    /// Repository path on the host, `owner/repo`.
    pub path: String,
    /// Version tag following the first '.'.
    pub tag: String,
    /// Path segments after the repository, in order.
    pub extra_segments: Vec<String>,
    /// Query string of the incoming request, without the leading '?'.
    pub raw_query: Option<String>,
}

impl ImportRequest {
    /// Parse a request path (with its leading '/') and optional query.
    ///
    /// The first two segments are joined and split at the first '.': what
    /// precedes it is the repository path, what follows is the tag.
    pub fn parse(
        request_path: &str,
        raw_query: Option<&str>,
        host: &str,
    ) -> Result<Self, PathError> {
        let trimmed = request_path.strip_prefix('/').unwrap_or(request_path);
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() < 2 {
            return Err(PathError::TooFewSegments(parts.len()));
        }

        let joined = format!("{}/{}", parts[0], parts[1]);
        let (path, tag) = joined
            .split_once('.')
            .ok_or_else(|| PathError::MissingTag(joined.clone()))?;

        Ok(Self {
            scm: SCM,
            host: host.to_string(),
            path: path.to_string(),
            tag: tag.to_string(),
            extra_segments: parts[2..].iter().map(|s| s.to_string()).collect(),
            raw_query: raw_query.filter(|q| !q.is_empty()).map(str::to_string),
        })
    }

    /// `true` when the request names only the repository, so the metadata
    /// page should be served instead of proxying.
    pub fn is_metadata(&self) -> bool {
        self.extra_segments.is_empty()
    }

    /// Module path as seen by tooling: `{domain}/{path}.{tag}`.
    pub fn module(&self, domain: &str) -> String {
        format!("{}/{}.{}", domain, self.path, self.tag)
    }

    /// Remaining segments joined back with '/'.
    pub fn extra_path(&self) -> String {
        self.extra_segments.join("/")
    }
}
