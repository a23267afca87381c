use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::HeaderMap,
    response::Html,
};
use search_session::PresentationMode;
use tracing::{debug, instrument};

use crate::{
    core::app_state::AppState,
    render::{
        escape_html, page::render_page, result_list::render_result_list,
        search_form::render_search_form,
    },
    routes::search_page::search_form_params::SearchFormParams,
};

const PAGE_TITLE: &str = "補助金検索";

/// `GET /` and `GET /search`.
///
/// Each request owns a fresh controller seeded from the query string. When
/// the form was submitted the search runs before rendering; a `detail`
/// parameter additionally opens that record over the results.
#[instrument(name = "search_page_route", skip_all)]
pub async fn search_page_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Html<String> {
    if let Some(id) = headers.get("X-Request-Id").and_then(|h| h.to_str().ok()) {
        debug!(%id, "request id attached");
    }

    let params = SearchFormParams::parse(raw.as_deref());
    let mut controller = params.to_controller(PresentationMode::Modal);

    if params.is_submitted() {
        // A validation failure is kept on the controller and rendered by the form.
        let _ = controller.submit(&state.client).await;
    }

    let mut main = render_search_form(&controller);

    if let Some(msg) = controller.error_message() {
        main.push_str(&format!(
            r#"<p class="search-error" role="alert">{}</p>"#,
            escape_html(msg)
        ));
    }

    if controller.is_results_open() {
        if let Some(mut list) = controller.result_list() {
            if let Some(id) = params.detail.as_deref() {
                list.view_detail(&state.client, id).await;
            }
            main.push_str(&render_result_list(&list, controller.mode(), &params));
        }
    }

    Html(render_page(PAGE_TITLE, &main))
}
