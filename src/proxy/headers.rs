//! Header handling for forwarded requests and relayed responses.
//!
//! Request headers travel to the upstream wholesale apart from the framing
//! headers the outbound client owns (`Host`, `Content-Length`,
//! `Transfer-Encoding`). Stripping the remaining hop-by-hop headers is opt-in.

use axum::http::header::{
    HeaderMap, HeaderName, CONNECTION, CONTENT_LENGTH, HOST, TE, TRAILER, TRANSFER_ENCODING,
    UPGRADE,
};

/// Headers derived by the outbound client from the target URL and body.
static CLIENT_FRAMING: [HeaderName; 3] = [HOST, CONTENT_LENGTH, TRANSFER_ENCODING];

/// Connection-scoped headers that belong to the downstream connection.
static DOWNSTREAM_FRAMING: [HeaderName; 2] = [CONNECTION, TRANSFER_ENCODING];

/// RFC 9110 hop-by-hop headers, plus the legacy keep-alive pair.
fn hop_by_hop() -> [HeaderName; 7] {
    [
        CONNECTION,
        HeaderName::from_static("keep-alive"),
        HeaderName::from_static("proxy-connection"),
        TE,
        TRAILER,
        TRANSFER_ENCODING,
        UPGRADE,
    ]
}

/// Build the header map sent to the upstream.
pub fn forward_headers(incoming: &HeaderMap, strip_hop_by_hop: bool) -> HeaderMap {
    let mut headers = incoming.clone();
    for name in CLIENT_FRAMING.iter() {
        headers.remove(name);
    }

    if strip_hop_by_hop {
        // Headers listed in Connection are hop-by-hop for this message too.
        let listed: Vec<HeaderName> = incoming
            .get_all(CONNECTION)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .filter_map(|token| HeaderName::from_bytes(token.trim().as_bytes()).ok())
            .collect();
        for name in listed.iter().chain(hop_by_hop().iter()) {
            headers.remove(name);
        }
    }

    headers
}

/// Append upstream response headers onto the outgoing response.
pub fn relay_headers(upstream: &HeaderMap, outgoing: &mut HeaderMap) {
    for (name, value) in upstream {
        if DOWNSTREAM_FRAMING.contains(name) {
            continue;
        }
        outgoing.append(name.clone(), value.clone());
    }
}
