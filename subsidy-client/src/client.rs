//! HTTP client for the subsidy API.
//!
//! Endpoints used:
//!   * listing search:        GET {api_base}/subsidies?keyword=...
//!   * upstream detail:       GET {api_base}/subsidies/id/{id}
//!   * local detail proxy:    GET {proxy_base}/api/subsidies?id={id}
//!
//! Responses are never cached and failed calls are not retried.

use reqwest::{
    Client, StatusCode,
    header::{CACHE_CONTROL, PRAGMA},
};
use tracing::{debug, instrument, warn};

use crate::{
    config::ClientConfig,
    decode::{decode_detail_response, decode_list_response, decode_upstream_detail_response},
    error_handler::{ConfigError, RequestFailure, Result, SubsidyClientError},
    query::SearchQuery,
    types::{SubsidyDetail, SubsidyListResponse, SubsidySummary},
};

const SNIPPET_CHARS: usize = 240;

#[derive(Debug, Clone)]
pub struct SubsidyClient {
    http: Client,
    url_subsidies: String,
    url_detail_proxy: String,
}

impl SubsidyClient {
    /// Creates a client from an explicit config.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidFormat`] if a base URL is not http(s)
    /// - [`ConfigError::HttpClient`] if the HTTP client cannot be built
    pub fn new(cfg: ClientConfig) -> Result<Self> {
        cfg.validate()?;

        let mut builder = Client::builder().user_agent(cfg.user_agent.clone());
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ConfigError::HttpClient)?;

        let api_base = cfg.api_base_url.trim_end_matches('/');
        let proxy_base = cfg.proxy_base_url.trim_end_matches('/');
        debug!(api_base, proxy_base, "creating SubsidyClient");

        Ok(Self {
            http,
            url_subsidies: format!("{api_base}/subsidies"),
            url_detail_proxy: format!("{proxy_base}/api/subsidies"),
        })
    }

    /// Searches the listing endpoint and returns the records in upstream order.
    pub async fn search_subsidies(&self, query: &SearchQuery) -> Result<Vec<SubsidySummary>> {
        Ok(self.search_subsidies_envelope(query).await?.result)
    }

    /// Same as [`Self::search_subsidies`] but keeps the `metadata` block.
    ///
    /// Sent with `Cache-Control: no-cache` and `Pragma: no-cache`; a live
    /// search must never be answered from an intermediate cache.
    #[instrument(skip_all, fields(keyword = %query.keyword))]
    pub async fn search_subsidies_envelope(
        &self,
        query: &SearchQuery,
    ) -> Result<SubsidyListResponse<SubsidySummary>> {
        let url = format!("{}?{}", self.url_subsidies, query.to_query_string());
        let body = self.get_bytes(&url, true).await?;
        let envelope = decode_list_response(&body)?;
        debug!(hits = envelope.result.len(), "search decoded");
        Ok(envelope)
    }

    /// Fetches one detail record through the local proxy route.
    ///
    /// # Errors
    /// - [`SubsidyClientError::NotFound`] when the proxy answers 404
    /// - [`SubsidyClientError::Request`] for other failures
    #[instrument(skip(self))]
    pub async fn get_subsidy_detail(&self, id: &str) -> Result<SubsidyDetail> {
        let url = format!("{}?id={}", self.url_detail_proxy, urlencoding::encode(id));
        let body = self.get_bytes(&url, false).await.map_err(|e| not_found_on_404(e, id))?;
        decode_detail_response(&body)
    }

    /// Fetches one detail record straight from the upstream API.
    ///
    /// Used by the proxy route itself.
    #[instrument(skip(self))]
    pub async fn fetch_upstream_detail(&self, id: &str) -> Result<SubsidyDetail> {
        let url = format!("{}/id/{}", self.url_subsidies, urlencoding::encode(id));
        let body = self.get_bytes(&url, false).await.map_err(|e| not_found_on_404(e, id))?;
        decode_upstream_detail_response(id, &body)
    }

    async fn get_bytes(&self, url: &str, no_cache: bool) -> Result<Vec<u8>> {
        debug!("GET {url}");

        let mut req = self.http.get(url);
        if no_cache {
            req = req.header(CACHE_CONTROL, "no-cache").header(PRAGMA, "no-cache");
        }
        let resp = req.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(SNIPPET_CHARS).collect::<String>();
            warn!(%status, url, "non-success status from upstream");
            return Err(RequestFailure::HttpStatus {
                status,
                url: url.to_string(),
                snippet,
            }
            .into());
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

fn not_found_on_404(err: SubsidyClientError, id: &str) -> SubsidyClientError {
    match err {
        SubsidyClientError::Request(RequestFailure::HttpStatus { status, .. })
            if status == StatusCode::NOT_FOUND =>
        {
            SubsidyClientError::NotFound(id.to_string())
        }
        other => other,
    }
}
