use std::fmt::Write;

use search_session::{KEYWORD_MAX_CHARS, KEYWORD_MIN_CHARS, SearchController, messages};
use subsidy_client::catalog::{EmployeeBucket, SortField, SortOrder, TargetArea, UsePurpose};

use super::escape_html;

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    )
}

/// The filter form. Submits with GET to `/search`.
pub fn render_search_form(controller: &SearchController) -> String {
    let c = controller.criteria();

    let sort_opts: String = SortField::ALL
        .iter()
        .map(|s| option(s.as_str(), s.label(), *s == c.sort))
        .collect();
    let order_opts: String = SortOrder::ALL
        .iter()
        .map(|o| option(o.as_str(), o.label(), *o == c.order))
        .collect();
    let acceptance_opts = format!(
        "{}{}",
        option("1", "要", c.accepting_only),
        option("0", "否", !c.accepting_only)
    );

    let mut purposes = String::new();
    for p in UsePurpose::all() {
        let _ = write!(
            purposes,
            r#"<label class="purpose"><input type="checkbox" name="use_purpose" value="{v}"{checked}/> {v}</label>"#,
            v = escape_html(p.as_str()),
            checked = if c.is_purpose_selected(p) { " checked" } else { "" },
        );
    }

    let mut employee_opts = option("", "従業員数を選択", c.employees.is_none());
    for e in EmployeeBucket::ALL {
        employee_opts.push_str(&option(e.as_str(), e.label(), c.employees == Some(e)));
    }

    let mut area_opts = option("", "地域を選択", c.area.is_none());
    for a in TargetArea::all() {
        area_opts.push_str(&option(a.as_str(), a.as_str(), c.area == Some(a)));
    }

    let validation = controller
        .validation()
        .map(|v| format!(r#"<p class="form-error" role="alert">{}</p>"#, v.user_message()))
        .unwrap_or_default();

    let submit_label = if controller.is_submitting() {
        messages::SEARCHING
    } else {
        "補助金を探す"
    };
    let disabled = if controller.can_submit() { "" } else { " disabled" };

    format!(
        r#"<section class="search-form">
  <h2>🌟 補助金検索 🌟</h2>
  <form method="get" action="/search">
    <label for="keyword">キーワード*</label>
    <input id="keyword" name="keyword" type="text" placeholder="例: 小規模事業者" minlength="{min}" maxlength="{max}" required value="{keyword}"/>
    {validation}
    <label for="sort">ソート項目*</label>
    <select id="sort" name="sort">{sort_opts}</select>
    <label for="order">ソート順*</label>
    <select id="order" name="order">{order_opts}</select>
    <label for="acceptance">募集期間内絞込み*</label>
    <select id="acceptance" name="acceptance">{acceptance_opts}</select>
    <fieldset>
      <legend>利用目的</legend>
      {purposes}
    </fieldset>
    <label for="target_number_of_employees">従業員数</label>
    <select id="target_number_of_employees" name="target_number_of_employees">{employee_opts}</select>
    <label for="target_area_search">補助対象地域</label>
    <select id="target_area_search" name="target_area_search">{area_opts}</select>
    <button type="submit"{disabled}>{submit_label}</button>
  </form>
</section>"#,
        min = KEYWORD_MIN_CHARS,
        max = KEYWORD_MAX_CHARS,
        keyword = escape_html(&c.keyword),
    )
}
