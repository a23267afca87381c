use std::fmt::Write;

use search_session::{PresentationMode, ResultList, SubsidyCard, messages};

use super::{detail_modal::render_detail_modal, escape_html};
use crate::routes::search_page::search_form_params::SearchFormParams;

fn render_card(card: &SubsidyCard, params: &SearchFormParams) -> String {
    format!(
        r#"<li class="subsidy-card" data-id="{id}">
  <h4>{title}</h4>
  <p>対象地域: {area}</p>
  <p>補助金上限: {max_limit}</p>
  <p>募集期間: {window}</p>
  <p>従業員数: {employees}</p>
  <a class="detail-link" href="{href}">詳細を見る</a>
</li>"#,
        id = escape_html(&card.id),
        title = escape_html(&card.title),
        area = escape_html(&card.area),
        max_limit = escape_html(&card.max_limit),
        window = escape_html(&card.window),
        employees = escape_html(&card.employees),
        href = escape_html(&params.to_href(Some(&card.id), false)),
    )
}

/// Renders the cards of a successful search, including the detail overlay
/// when one is open.
///
/// In [`PresentationMode::Modal`] the list sits in a dismissible dialog;
/// in [`PresentationMode::Inline`] it is a plain section under the form.
pub fn render_result_list(
    list: &ResultList,
    mode: PresentationMode,
    params: &SearchFormParams,
) -> String {
    let mut body = String::new();

    if let Some(msg) = list.empty_message() {
        let _ = write!(body, r#"<p class="no-results">{msg}</p>"#);
    } else {
        body.push_str(r#"<ul class="subsidy-list">"#);
        for card in list.cards() {
            body.push_str(&render_card(&card, params));
        }
        body.push_str("</ul>");
    }

    if list.is_loading() {
        let _ = write!(body, r#"<p class="loading">{}</p>"#, messages::DETAIL_LOADING);
    }
    if let Some(err) = list.error() {
        let _ = write!(body, r#"<p class="detail-error" role="alert">{err}</p>"#);
    }
    if let Some(modal) = list.modal() {
        body.push_str(&render_detail_modal(modal, &params.to_href(None, false)));
    }

    match mode {
        PresentationMode::Modal => format!(
            r#"<div class="results-dialog" role="dialog" aria-modal="true">
  <h2>{title}</h2>
  <p>{description}</p>
  {body}
  <a class="close" href="{close}">閉じる</a>
</div>"#,
            title = messages::RESULTS_TITLE,
            description = messages::RESULTS_DESCRIPTION,
            close = escape_html(&params.to_href(None, true)),
        ),
        PresentationMode::Inline => format!(
            r#"<section class="results-inline">
  <h2>{title}</h2>
  <p>{description}</p>
  {body}
</section>"#,
            title = messages::RESULTS_TITLE,
            description = messages::RESULTS_DESCRIPTION,
        ),
    }
}
