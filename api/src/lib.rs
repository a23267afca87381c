//! HTTP surface: the server-rendered search page and the `/api/subsidies`
//! proxy the page uses for detail lookups.

use std::sync::Arc;

use axum::{Router, http::StatusCode, middleware, routing::get};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

pub mod core;
pub mod error_handler;
mod middleware_layer;
pub mod render;
pub mod routes;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    middleware_layer::error_envelope::error_envelope_mapper,
    routes::{
        health_route::health_route, proxy::subsidies_proxy_route::subsidies_proxy_route,
        search_page::search_page_route::search_page_route,
    },
};

/// Builds the router for the given shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(search_page_route))
        .route("/search", get(search_page_route))
        .route("/api/subsidies", get(subsidies_proxy_route))
        .route("/health", get(health_route))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn(error_envelope_mapper))
        .with_state(state)
}

/// Loads state from the environment, binds `API_ADDRESS` and serves until
/// Ctrl+C or SIGTERM.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::from_env()?);
    let addr = state.config.api_address.clone();

    let listener = TcpListener::bind(&addr).await.map_err(AppError::Bind)?;
    info!(%addr, "listening");

    serve(listener, state).await
}

/// Serves on an already bound listener.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> AppResult<()> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{
        Json, Router,
        extract::{Path, RawQuery, State},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
        routing::get,
    };
    use search_session::messages;
    use serde_json::{Value, json};
    use subsidy_client::{ClientConfig, SubsidyClient};

    use super::*;
    use crate::core::app_state::AppConfig;

    #[derive(Clone, Default)]
    struct Upstream {
        fail: bool,
        list_calls: Arc<AtomicUsize>,
        queries: Arc<Mutex<Vec<String>>>,
        headers: Arc<Mutex<Vec<HeaderMap>>>,
    }

    async fn upstream_list(
        State(up): State<Upstream>,
        headers: HeaderMap,
        RawQuery(q): RawQuery,
    ) -> Response {
        up.list_calls.fetch_add(1, Ordering::SeqCst);
        up.queries.lock().unwrap().push(q.unwrap_or_default());
        up.headers.lock().unwrap().push(headers);
        if up.fail {
            return (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response();
        }
        Json(json!({
            "metadata": { "type": "application/json", "resultset": { "count": 2 } },
            "result": [
                { "id": "s2", "title": "二番目の補助金", "subsidy_max_limit": 5000000,
                  "target_area_search": "全国", "target_number_of_employees": "20名以下" },
                { "id": "s1", "title": "一番目の補助金" }
            ]
        }))
        .into_response()
    }

    async fn upstream_detail(Path(id): Path<String>) -> Json<Value> {
        if id == "missing" {
            return Json(json!({ "result": [] }));
        }
        Json(json!({
            "result": [ {
                "id": id,
                "subsidy_name": "詳細の補助金",
                "catch_copy": "注目の制度",
                "purpose": "設備投資"
            } ]
        }))
    }

    /// Starts a fake upstream and the app; returns the app base URL.
    async fn spawn_app(upstream: Upstream) -> String {
        let fake = Router::new()
            .route("/subsidies", get(upstream_list))
            .route("/subsidies/id/{id}", get(upstream_detail))
            .with_state(upstream);
        let fake_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let fake_base = format!("http://{}", fake_listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(fake_listener, fake).await.unwrap();
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app_addr = listener.local_addr().unwrap().to_string();
        let app_base = format!("http://{app_addr}");

        let client = SubsidyClient::new(ClientConfig::with_bases(&fake_base, &app_base)).unwrap();
        let state = Arc::new(AppState::new(AppConfig { api_address: app_addr }, client));
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });
        app_base
    }

    async fn get_text(url: &str) -> (StatusCode, String) {
        let res = reqwest::get(url).await.unwrap();
        let status = res.status();
        (status, res.text().await.unwrap())
    }

    #[tokio::test]
    async fn pristine_page_makes_no_upstream_call() {
        let up = Upstream::default();
        let base = spawn_app(up.clone()).await;

        let (status, html) = get_text(&format!("{base}/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("補助金を探す"));
        assert!(!html.contains(messages::RESULTS_TITLE));
        assert_eq!(up.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn submitted_search_renders_cards_in_upstream_order() {
        let up = Upstream::default();
        let base = spawn_app(up.clone()).await;

        let (_, html) = get_text(&format!("{base}/search?keyword=%E8%A3%9C%E5%8A%A9%E9%87%91")).await;
        assert!(html.contains(messages::RESULTS_TITLE));
        let second = html.find("二番目の補助金").unwrap();
        let first = html.find("一番目の補助金").unwrap();
        assert!(second < first);
        assert!(html.contains("5,000,000円"));
        assert!(html.contains("未定義円"));

        let q = up.queries.lock().unwrap()[0].clone();
        assert!(q.starts_with("keyword=%E8%A3%9C%E5%8A%A9%E9%87%91&sort=created_date&order=DESC&acceptance=1"));
        assert!(q.contains("&industry=%E8%A3%BD%E9%80%A0%E6%A5%AD"));
        let headers = up.headers.lock().unwrap()[0].clone();
        assert_eq!(headers.get("cache-control").unwrap(), "no-cache");
        assert_eq!(headers.get("pragma").unwrap(), "no-cache");
    }

    #[tokio::test]
    async fn short_keyword_rerenders_form_without_request() {
        let up = Upstream::default();
        let base = spawn_app(up.clone()).await;

        let (status, html) = get_text(&format!("{base}/search?keyword=a")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(messages::KEYWORD_TOO_SHORT));
        assert_eq!(up.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_failure_shows_generic_message() {
        let up = Upstream {
            fail: true,
            ..Default::default()
        };
        let base = spawn_app(up).await;

        let (_, html) = get_text(&format!("{base}/search?keyword=abc")).await;
        assert!(html.contains(messages::SEARCH_FAILED));
        assert!(!html.contains("upstream down"));
    }

    #[tokio::test]
    async fn detail_parameter_opens_modal_through_proxy() {
        let base = spawn_app(Upstream::default()).await;

        let (_, html) = get_text(&format!("{base}/search?keyword=abc&detail=s1")).await;
        assert!(html.contains("detail-modal"));
        assert!(html.contains("注目の制度"));
        assert!(html.contains("<h3>目的</h3><p>設備投資</p>"));

        let (_, html) = get_text(&format!("{base}/search?keyword=abc&detail=missing")).await;
        assert!(html.contains(messages::DETAIL_FAILED));
        assert!(!html.contains("detail-modal"));
    }

    #[tokio::test]
    async fn closed_results_are_not_fetched() {
        let up = Upstream::default();
        let base = spawn_app(up.clone()).await;

        let (_, html) = get_text(&format!("{base}/search?keyword=abc&closed=1")).await;
        assert!(!html.contains(messages::RESULTS_TITLE));
        assert_eq!(up.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn proxy_returns_bare_detail_and_list_envelope() {
        let base = spawn_app(Upstream::default()).await;

        let detail: Value = reqwest::get(format!("{base}/api/subsidies?id=s9"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(detail["id"], "s9");
        assert!(detail.get("result").is_none());

        let res = reqwest::get(format!("{base}/api/subsidies?keyword=abc")).await.unwrap();
        assert_eq!(res.headers().get("cache-control").unwrap(), "no-cache");
        let list: Value = res.json().await.unwrap();
        assert_eq!(list["metadata"]["resultset"]["count"], 2);
        assert_eq!(list["result"][0]["id"], "s2");
    }

    #[tokio::test]
    async fn proxy_error_envelopes() {
        let base = spawn_app(Upstream {
            fail: true,
            ..Default::default()
        })
        .await;

        let res = reqwest::get(format!("{base}/api/subsidies?id=missing")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let res = reqwest::get(format!("{base}/api/subsidies?keyword=a")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"]["code"], "INVALID_KEYWORD");
        assert_eq!(body["error"]["details"][0]["param"], "keyword");

        let res = reqwest::get(format!("{base}/api/subsidies?id=&keyword=abc")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"]["details"][0]["param"], "id");

        let res = reqwest::get(format!("{base}/api/subsidies?keyword=abc")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert!(!body.to_string().contains("upstream down"));
    }

    #[tokio::test]
    async fn unknown_api_route_is_enveloped_with_request_id() {
        let base = spawn_app(Upstream::default()).await;

        let res = reqwest::get(format!("{base}/api/nope")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers().get("x-request-id").is_some());
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let health: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health, json!({ "success": true, "data": { "status": "ok" } }));
    }
}
