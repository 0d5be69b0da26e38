//! Request handler: snapshot, negotiate, deliver.

use crate::core::error::{Result, RevalidError};
use crate::core::negotiator::CacheNegotiator;
use crate::core::protocol::constants::headers as header_names;
use crate::core::types::{RequestSnapshot, ResponseEnvelope};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use std::io;
use std::sync::Arc;

/// Accepts any method on the negotiated route.
///
/// This is the outer error boundary: any failure while handling is
/// logged and the request is dropped with no second response attempt.
pub async fn handle_echo(
    State(negotiator): State<Arc<CacheNegotiator>>,
    req: Request,
) -> Response {
    match negotiate_request(&negotiator, req).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("dropping request: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn negotiate_request(negotiator: &CacheNegotiator, req: Request) -> Result<Response> {
    let (parts, body) = req.into_parts();

    // Consume the whole body stream before negotiating.
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| RevalidError::Io(io::Error::other(e)))?;

    let snapshot = snapshot_from_parts(
        parts.method.as_str(),
        &parts.uri.to_string(),
        &parts.headers,
        body,
    );
    tracing::info!(
        "{} {} (conditional={})",
        snapshot.method,
        snapshot.uri,
        snapshot.header(header_names::IF_NONE_MATCH).is_some()
    );

    let envelope = negotiator.respond(&snapshot)?;
    into_axum_response(envelope)
}

/// Capture method, URI, headers, and the fully-read body.
///
/// Header values that are not valid visible ASCII are skipped, matching
/// what the negotiator could compare against anyway.
fn snapshot_from_parts(
    method: &str,
    uri: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> RequestSnapshot {
    let mut snapshot = RequestSnapshot::new(method, uri).with_body(body);
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            snapshot = snapshot.with_header(name.as_str(), value);
        }
    }
    snapshot
}

/// Convert a validated envelope into an axum response.
///
/// Fresh responses declare their exact byte length; a 304 declares no
/// length at all, and the envelope contract guarantees it has no body.
fn into_axum_response(envelope: ResponseEnvelope) -> Result<Response> {
    envelope.validate()?;

    let mut builder = Response::builder().status(envelope.status);
    for (name, value) in &envelope.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(len) = envelope.content_length() {
        builder = builder.header(header::CONTENT_LENGTH, len);
    }
    builder
        .body(Body::from(envelope.body))
        .map_err(|e| RevalidError::Protocol(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    // ========== Snapshot Capture Tests ==========

    #[test]
    fn test_snapshot_captures_headers_lowercased() {
        let mut headers = HeaderMap::new();
        headers.insert("if-none-match", HeaderValue::from_static("777"));
        let snapshot = snapshot_from_parts("GET", "/test", &headers, Bytes::new());
        assert_eq!(snapshot.header("If-None-Match"), Some("777"));
    }

    #[test]
    fn test_snapshot_joins_repeated_headers() {
        let mut headers = HeaderMap::new();
        headers.append("if-none-match", HeaderValue::from_static("\"123\""));
        headers.append("if-none-match", HeaderValue::from_static("\"777\""));
        let snapshot = snapshot_from_parts("GET", "/test", &headers, Bytes::new());
        assert_eq!(snapshot.header("if-none-match"), Some("\"123\", \"777\""));
    }

    #[test]
    fn test_snapshot_keeps_method_uri_body() {
        let snapshot = snapshot_from_parts(
            "POST",
            "/test?a=1",
            &HeaderMap::new(),
            Bytes::from("payload"),
        );
        assert_eq!(snapshot.method, "POST");
        assert_eq!(snapshot.uri, "/test?a=1");
        assert_eq!(snapshot.body, Bytes::from("payload"));
    }

    // ========== Envelope Conversion Tests ==========

    #[test]
    fn test_convert_fresh_sets_exact_content_length() {
        let envelope = ResponseEnvelope::fresh("12345").with_header("etag", "777");
        let response = into_axum_response(envelope).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_LENGTH),
            Some(&HeaderValue::from_static("5"))
        );
        assert_eq!(
            response.headers().get(header::ETAG),
            Some(&HeaderValue::from_static("777"))
        );
    }

    #[test]
    fn test_convert_304_has_no_content_length() {
        let envelope = ResponseEnvelope::not_modified().with_header("etag", "777");
        let response = into_axum_response(envelope).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert!(response.headers().get(header::CONTENT_LENGTH).is_none());
    }

    #[test]
    fn test_convert_rejects_corrupted_304() {
        let mut envelope = ResponseEnvelope::not_modified();
        envelope.body = Bytes::from("smuggled");
        assert!(matches!(
            into_axum_response(envelope),
            Err(RevalidError::Protocol(_))
        ));
    }
}
