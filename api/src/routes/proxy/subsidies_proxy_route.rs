//! `GET /api/subsidies`: same-origin proxy to the upstream subsidy API.
//!
//! - `?id=<id>` returns the bare detail object.
//! - any other query is forwarded to the upstream list endpoint and the
//!   `{ metadata, result }` envelope is returned as is.
//! - a present but blank `id` is rejected.

use std::sync::Arc;

use axum::{
    Json,
    extract::{RawQuery, State},
    http::{HeaderMap, HeaderValue, header::CACHE_CONTROL},
    response::{IntoResponse, Response},
};
use search_session::validate_keyword;
use subsidy_client::SearchQuery;
use tracing::{debug, info, instrument};
use url::form_urlencoded;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
};

#[instrument(name = "subsidies_proxy_route", skip_all)]
pub async fn subsidies_proxy_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> AppResult<Response> {
    if let Some(id) = headers.get("X-Request-Id").and_then(|h| h.to_str().ok()) {
        debug!(%id, "request id attached");
    }

    let pairs: Vec<(String, String)> = form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
        .into_owned()
        .collect();

    if let Some((_, id)) = pairs.iter().find(|(k, _)| k == "id") {
        if id.trim().is_empty() {
            return Err(AppError::BlankId);
        }
        let detail = state.client.fetch_upstream_detail(id).await?;
        info!(id = %id, "detail proxied");
        return Ok(Json(detail).into_response());
    }

    let query = SearchQuery::from_pairs(pairs);
    validate_keyword(&query.keyword)?;

    let envelope = state.client.search_subsidies_envelope(&query).await?;
    info!(hits = envelope.result.len(), "search proxied");

    let mut res = Json(envelope).into_response();
    res.headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    Ok(res)
}
