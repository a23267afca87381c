//! Server-side HTML for the search page.
//!
//! Markup is assembled with `format!`; every dynamic value goes through
//! [`escape_html`] first.

pub mod detail_modal;
pub mod page;
pub mod result_list;
pub mod search_form;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
