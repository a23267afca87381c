//! User-editable search filters and their validation.

use subsidy_client::{
    SearchQuery,
    catalog::{
        EmployeeBucket, FIXED_INDUSTRY, SortField, SortOrder, TargetArea, UsePurpose,
        join_use_purposes,
    },
};
use thiserror::Error;

use crate::messages;

pub const KEYWORD_MIN_CHARS: usize = 2;
pub const KEYWORD_MAX_CHARS: usize = 255;

/// Client-side validation failure. Blocks submission; never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("keyword is empty or whitespace only")]
    KeywordBlank,

    #[error("keyword has {0} characters, minimum is 2")]
    KeywordTooShort(usize),

    #[error("keyword has {0} characters, maximum is 255")]
    KeywordTooLong(usize),
}

impl ValidationFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationFailure::KeywordBlank => messages::KEYWORD_BLANK,
            ValidationFailure::KeywordTooShort(_) => messages::KEYWORD_TOO_SHORT,
            ValidationFailure::KeywordTooLong(_) => messages::KEYWORD_TOO_LONG,
        }
    }
}

/// Current filter selection of the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub keyword: String,
    pub sort: SortField,
    pub order: SortOrder,
    /// "Only currently accepting" (`acceptance=1`).
    pub accepting_only: bool,
    /// Selected purposes in the order they were checked.
    pub use_purposes: Vec<UsePurpose>,
    pub employees: Option<EmployeeBucket>,
    pub area: Option<TargetArea>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            sort: SortField::default(),
            order: SortOrder::default(),
            accepting_only: true,
            use_purposes: Vec::new(),
            employees: None,
            area: None,
        }
    }
}

/// Checks a keyword: not blank, 2..=255 characters.
pub fn validate_keyword(keyword: &str) -> Result<(), ValidationFailure> {
    if keyword.trim().is_empty() {
        return Err(ValidationFailure::KeywordBlank);
    }
    let len = keyword.chars().count();
    if len < KEYWORD_MIN_CHARS {
        return Err(ValidationFailure::KeywordTooShort(len));
    }
    if len > KEYWORD_MAX_CHARS {
        return Err(ValidationFailure::KeywordTooLong(len));
    }
    Ok(())
}

impl SearchCriteria {
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        validate_keyword(&self.keyword)
    }

    /// Checks or unchecks one purpose. Checking appends; duplicates are ignored.
    pub fn toggle_purpose(&mut self, purpose: UsePurpose, checked: bool) {
        if checked {
            if !self.use_purposes.contains(&purpose) {
                self.use_purposes.push(purpose);
            }
        } else {
            self.use_purposes.retain(|p| *p != purpose);
        }
    }

    pub fn is_purpose_selected(&self, purpose: UsePurpose) -> bool {
        self.use_purposes.contains(&purpose)
    }

    /// Validates and lowers into the wire query.
    pub fn to_query(&self) -> Result<SearchQuery, ValidationFailure> {
        self.validate()?;
        Ok(SearchQuery {
            keyword: self.keyword.clone(),
            sort: self.sort.as_str().to_string(),
            order: self.order.as_str().to_string(),
            acceptance: if self.accepting_only { "1" } else { "0" }.to_string(),
            use_purpose: join_use_purposes(&self.use_purposes),
            industry: FIXED_INDUSTRY.to_string(),
            target_number_of_employees: self
                .employees
                .map(|e| e.as_str().to_string())
                .unwrap_or_default(),
            target_area_search: self
                .area
                .map(|a| a.as_str().to_string())
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_keyword(k: &str) -> SearchCriteria {
        SearchCriteria {
            keyword: k.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn keyword_length_bounds() {
        assert_eq!(with_keyword("").validate(), Err(ValidationFailure::KeywordBlank));
        assert_eq!(with_keyword("   ").validate(), Err(ValidationFailure::KeywordBlank));
        assert_eq!(
            with_keyword("補").validate(),
            Err(ValidationFailure::KeywordTooShort(1))
        );
        assert!(with_keyword("補助").validate().is_ok());
        assert!(with_keyword(&"あ".repeat(255)).validate().is_ok());
        assert_eq!(
            with_keyword(&"あ".repeat(256)).validate(),
            Err(ValidationFailure::KeywordTooLong(256))
        );
    }

    #[test]
    fn defaults_match_form() {
        let c = SearchCriteria::default();
        assert_eq!(c.sort, SortField::CreatedDate);
        assert_eq!(c.order, SortOrder::Desc);
        assert!(c.accepting_only);
    }

    #[test]
    fn scenario_query_from_defaults() {
        let q = with_keyword("小規模事業者").to_query().unwrap();
        assert_eq!(
            q.to_query_string(),
            "keyword=%E5%B0%8F%E8%A6%8F%E6%A8%A1%E4%BA%8B%E6%A5%AD%E8%80%85\
             &sort=created_date&order=DESC&acceptance=1&use_purpose=\
             &industry=%E8%A3%BD%E9%80%A0%E6%A5%AD\
             &target_number_of_employees=&target_area_search="
        );
    }

    #[test]
    fn purposes_join_in_selection_order() {
        let all: Vec<UsePurpose> = UsePurpose::all().collect();
        let mut c = with_keyword("補助金");
        c.toggle_purpose(all[6], true);
        c.toggle_purpose(all[0], true);
        c.toggle_purpose(all[3], true);
        c.toggle_purpose(all[0], false);
        c.toggle_purpose(all[6], true);

        let q = c.to_query().unwrap();
        assert_eq!(
            q.use_purpose,
            format!("{} / {}", all[6].as_str(), all[3].as_str())
        );
    }

    #[test]
    fn selects_lower_to_wire_values() {
        let mut c = with_keyword("補助金");
        c.accepting_only = false;
        c.sort = SortField::AcceptanceEnd;
        c.order = SortOrder::Asc;
        c.employees = Some(EmployeeBucket::Unrestricted);
        c.area = TargetArea::parse("近畿地方");

        let q = c.to_query().unwrap();
        assert_eq!(q.acceptance, "0");
        assert_eq!(q.sort, "acceptance_end_datetime");
        assert_eq!(q.order, "ASC");
        assert_eq!(q.target_number_of_employees, "従業員の制約なし");
        assert_eq!(q.target_area_search, "近畿地方");
        assert_eq!(q.industry, "製造業");
    }
}
