//! Overlay presenting one fully resolved subsidy.

use subsidy_client::{SubsidyDetail, UNDEFINED_LABEL};

use crate::format::{format_datetime, format_yen};

/// One labelled field of the modal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Owns the detail record while the overlay is open. The only action is
/// [`DetailModal::dismiss`], which drops the record.
#[derive(Debug, Clone)]
pub struct DetailModal {
    detail: SubsidyDetail,
}

impl DetailModal {
    pub fn new(detail: SubsidyDetail) -> Self {
        Self { detail }
    }

    pub fn detail(&self) -> &SubsidyDetail {
        &self.detail
    }

    pub fn title(&self) -> &str {
        self.detail.summary.display_title()
    }

    pub fn catch_copy(&self) -> Option<&str> {
        self.detail.catch_copy.as_deref()
    }

    pub fn summary_text(&self) -> Option<&str> {
        self.detail.detail.as_deref()
    }

    pub fn rows(&self) -> Vec<DetailRow> {
        let d = &self.detail;
        let text = |v: Option<&str>| v.unwrap_or(UNDEFINED_LABEL).to_string();

        vec![
            DetailRow {
                label: "目的",
                value: text(d.purpose.as_deref()),
            },
            DetailRow {
                label: "対象業種",
                value: text(d.target_industry.as_deref()),
            },
            DetailRow {
                label: "対象地域",
                value: d.summary.display_area().to_string(),
            },
            DetailRow {
                label: "詳細地域",
                value: text(d.target_area_detail.as_deref()),
            },
            DetailRow {
                label: "従業員数",
                value: d.summary.display_employees().to_string(),
            },
            DetailRow {
                label: "補助金上限",
                value: format_yen(d.summary.subsidy_max_limit),
            },
            DetailRow {
                label: "募集開始",
                value: format_datetime(d.summary.acceptance_start_datetime.as_ref()),
            },
            DetailRow {
                label: "募集終了",
                value: format_datetime(d.summary.acceptance_end_datetime.as_ref()),
            },
        ]
    }

    /// Closes the overlay and discards the record.
    pub fn dismiss(self) {}
}
