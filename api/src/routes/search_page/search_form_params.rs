//! Query-string form state of the search page.
//!
//! The page is a plain GET form, so every interaction (submit, open detail,
//! close detail, close results) is a link carrying the whole form state.

use search_session::{PresentationMode, SearchController, SearchCriteria};
use subsidy_client::catalog::{
    EmployeeBucket, SortField, SortOrder, TargetArea, USE_PURPOSE_DELIMITER, UsePurpose,
};
use url::form_urlencoded;

/// Decoded page parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFormParams {
    pub criteria: SearchCriteria,
    /// A `keyword` parameter was present: the form was submitted.
    pub keyword_present: bool,
    /// Detail record to open, if any.
    pub detail: Option<String>,
    /// The results panel was dismissed.
    pub closed: bool,
}

impl SearchFormParams {
    /// Parses a raw query string. Unknown keys and unknown enumeration
    /// values are ignored and fall back to the form defaults.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut out = Self::default();
        let Some(raw) = raw else {
            return out;
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "keyword" => {
                    out.keyword_present = true;
                    out.criteria.keyword = value.into_owned();
                }
                "sort" => {
                    if let Some(s) = SortField::parse(&value) {
                        out.criteria.sort = s;
                    }
                }
                "order" => {
                    if let Some(o) = SortOrder::parse(&value) {
                        out.criteria.order = o;
                    }
                }
                "acceptance" => out.criteria.accepting_only = value != "0",
                "use_purpose" => {
                    for part in value.split(USE_PURPOSE_DELIMITER) {
                        if let Some(p) = UsePurpose::parse(part.trim()) {
                            out.criteria.toggle_purpose(p, true);
                        }
                    }
                }
                "target_number_of_employees" => {
                    out.criteria.employees = EmployeeBucket::parse(&value);
                }
                "target_area_search" => out.criteria.area = TargetArea::parse(&value),
                "detail" if !value.is_empty() => out.detail = Some(value.into_owned()),
                "closed" => out.closed = value == "1",
                _ => {}
            }
        }
        out
    }

    /// A controller whose form holds these parameters, entered through the
    /// same edit operations a user would perform.
    pub fn to_controller(&self, mode: PresentationMode) -> SearchController {
        let c = &self.criteria;
        let mut controller = SearchController::new(mode);
        controller.set_keyword(c.keyword.as_str());
        controller.set_sort(c.sort);
        controller.set_order(c.order);
        controller.set_accepting_only(c.accepting_only);
        for p in &c.use_purposes {
            controller.toggle_purpose(*p, true);
        }
        controller.set_employees(c.employees);
        controller.set_area(c.area);
        controller
    }

    /// Whether the page should run a search.
    pub fn is_submitted(&self) -> bool {
        self.keyword_present && !self.closed
    }

    /// Serializes the form state back into a `/search?...` link.
    ///
    /// `detail` and `closed` are taken from the arguments, not from `self`.
    pub fn to_href(&self, detail: Option<&str>, closed: bool) -> String {
        let c = &self.criteria;
        let mut ser = form_urlencoded::Serializer::new(String::new());
        ser.append_pair("keyword", &c.keyword)
            .append_pair("sort", c.sort.as_str())
            .append_pair("order", c.order.as_str())
            .append_pair("acceptance", if c.accepting_only { "1" } else { "0" });
        for p in &c.use_purposes {
            ser.append_pair("use_purpose", p.as_str());
        }
        ser.append_pair(
            "target_number_of_employees",
            c.employees.map(|e| e.as_str()).unwrap_or_default(),
        )
        .append_pair(
            "target_area_search",
            c.area.map(|a| a.as_str()).unwrap_or_default(),
        );
        if let Some(id) = detail {
            ser.append_pair("detail", id);
        }
        if closed {
            ser.append_pair("closed", "1");
        }
        format!("/search?{}", ser.finish())
    }
}
