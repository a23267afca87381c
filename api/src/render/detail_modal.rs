use std::fmt::Write;

use search_session::DetailModal;

use super::escape_html;

/// Overlay for one detail record. `close_href` is the link that dismisses it.
pub fn render_detail_modal(modal: &DetailModal, close_href: &str) -> String {
    let mut rows = String::new();
    for row in modal.rows() {
        let _ = write!(
            rows,
            "<div class=\"detail-row\"><h3>{}</h3><p>{}</p></div>",
            row.label,
            escape_html(&row.value)
        );
    }

    let catch_copy = modal
        .catch_copy()
        .map(|c| format!(r#"<p class="catch-copy">{}</p>"#, escape_html(c)))
        .unwrap_or_default();
    let summary = modal
        .summary_text()
        .map(|s| format!(r#"<p class="summary">{}</p>"#, escape_html(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="detail-modal" role="dialog" aria-modal="true">
  <h2>{title}</h2>
  {catch_copy}
  {summary}
  {rows}
  <a class="close" href="{close}">閉じる</a>
</div>"#,
        title = escape_html(modal.title()),
        close = escape_html(close_href),
    )
}
