//! HTML pages served to tooling clients and browsers.
//!
//! The `go-import` and `go-source` meta tags are a compatibility contract:
//! field order and the `{/dir}`, `{file}`, `{line}` placeholders are emitted
//! literally for the client to expand.

use askama::Template;

use crate::import::ImportRequest;

#[derive(Template)]
#[template(path = "import.html")]
struct ImportTemplate<'a> {
    domain: &'a str,
    scm: &'a str,
    host: &'a str,
    path: &'a str,
    tag: &'a str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    domain: &'a str,
}

/// Render the metadata document for a two-segment import path.
pub fn render_import(domain: &str, request: &ImportRequest) -> Result<String, askama::Error> {
    ImportTemplate {
        domain,
        scm: request.scm,
        host: &request.host,
        path: &request.path,
        tag: &request.tag,
    }
    .render()
}

/// Render the welcome page.
pub fn render_index(domain: &str) -> Result<String, askama::Error> {
    IndexTemplate { domain }.render()
}
