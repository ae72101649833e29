//! Response construction for the two import outcomes.
//!
//! # Design Decisions
//! - Upstream responses are streamed, never buffered
//! - Upstream headers are appended as-is apart from downstream framing
//! - A body failure after the status is sent can only be logged; the stream
//!   ends and hyper drops the connection

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use futures_util::TryStreamExt;

use crate::proxy::headers::relay_headers;

/// A `text/html` page with an implicit 200.
pub fn html(body: String) -> Response {
    let mut response = body.into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
    response
}

/// Turn an upstream response into the client response, streaming its body.
pub fn relay(upstream: reqwest::Response, url: String) -> Response {
    let status = upstream.status();
    let headers = upstream.headers().clone();

    let stream = upstream.bytes_stream().inspect_err(move |e| {
        tracing::error!(url = %url, error = %e, "Copying upstream body failed");
    });

    let mut response = Response::new(Body::from_stream(stream));
    *response.status_mut() = status;
    relay_headers(&headers, response.headers_mut());
    response
}
