use axum::{
    body::Body,
    http::{
        HeaderMap, HeaderValue, Request,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{debug, warn};

use crate::core::http::envelope::{ErrorCode, ErrorEnvelope};

const REQUEST_ID: &str = "x-request-id";

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

fn ensure_request_id(headers: &mut HeaderMap) -> String {
    if let Some(v) = headers.get(REQUEST_ID).and_then(|h| h.to_str().ok()) {
        if !v.trim().is_empty() {
            return v.to_string();
        }
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    let id = format!("req-{nanos}");
    if let Ok(value) = HeaderValue::from_str(&id) {
        headers.insert(REQUEST_ID, value);
    }
    id
}

/// Tags every response with an `X-Request-Id` and rewrites plain-text 4xx
/// responses under `/api` (axum rejections, unknown routes) into the
/// [`ErrorEnvelope`]. Other responses pass through unbuffered.
pub async fn error_envelope_mapper(req: Request<Body>, next: Next) -> Response {
    let is_api = req.uri().path().starts_with("/api");
    let mut res = next.run(req).await;
    let request_id = ensure_request_id(res.headers_mut());

    let status = res.status();
    if !is_api || !status.is_client_error() || is_json(res.headers()) {
        return res;
    }

    debug!(%request_id, %status, "wrapping plain error response in envelope");

    let (mut parts, body) = res.into_parts();
    let original = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(e) => {
            warn!(%request_id, error = %e, "failed to read error body");
            String::new()
        }
    };
    let message = if original.is_empty() {
        status.canonical_reason().unwrap_or("error").to_string()
    } else {
        original
    };

    let envelope = ErrorEnvelope::new(ErrorCode::for_client_status(status), message, Vec::new());
    let body = match serde_json::to_vec(&envelope) {
        Ok(v) => v,
        Err(_) => Vec::new(),
    };

    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    parts.headers.remove(CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(body))
}
