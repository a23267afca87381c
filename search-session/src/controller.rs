//! Search form controller: owns the criteria and the result state machine.
//!
//! ```text
//! Idle ──begin_submit──▶ Loading ──complete──▶ Success | Error
//!   ▲                                              │
//!   └──────────────── next begin_submit ───────────┘
//! ```
//!
//! Every submission takes a new sequence number. A response is applied only
//! if its ticket carries the current number, so a slow earlier request can
//! never overwrite the outcome of a newer one.

use subsidy_client::{
    SearchQuery, SubsidySource, SubsidySummary,
    catalog::{EmployeeBucket, SortField, SortOrder, TargetArea, UsePurpose},
};
use tracing::{debug, error, info};

use crate::{
    criteria::{SearchCriteria, ValidationFailure},
    messages,
    result_list::ResultList,
};

/// Exactly one of these holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchResultState {
    #[default]
    Idle,
    Loading,
    Success(Vec<SubsidySummary>),
    /// User-facing message; the cause is only logged.
    Error(String),
}

/// How a successful search is presented by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    /// A dialog over the form (the form's own results panel).
    #[default]
    Modal,
    /// A list below the form.
    Inline,
}

/// Handle for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: SearchQuery,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchController {
    criteria: SearchCriteria,
    state: SearchResultState,
    seq: u64,
    results_open: bool,
    mode: PresentationMode,
    validation: Option<ValidationFailure>,
}

impl SearchController {
    pub fn new(mode: PresentationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_criteria(mode: PresentationMode, criteria: SearchCriteria) -> Self {
        Self {
            criteria,
            mode,
            ..Self::default()
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn state(&self) -> &SearchResultState {
        &self.state
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    /// Last validation failure, cleared by the next valid submission.
    pub fn validation(&self) -> Option<ValidationFailure> {
        self.validation
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SearchResultState::Loading)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn is_results_open(&self) -> bool {
        self.results_open
    }

    pub fn close_results(&mut self) {
        self.results_open = false;
    }

    /* ---------------------------- form edits ----------------------------- */

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.criteria.keyword = keyword.into();
    }

    pub fn set_sort(&mut self, sort: SortField) {
        self.criteria.sort = sort;
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.criteria.order = order;
    }

    pub fn set_accepting_only(&mut self, accepting_only: bool) {
        self.criteria.accepting_only = accepting_only;
    }

    pub fn toggle_purpose(&mut self, purpose: UsePurpose, checked: bool) {
        self.criteria.toggle_purpose(purpose, checked);
    }

    pub fn set_employees(&mut self, employees: Option<EmployeeBucket>) {
        self.criteria.employees = employees;
    }

    pub fn set_area(&mut self, area: Option<TargetArea>) {
        self.criteria.area = area;
    }

    /* ---------------------------- submission ----------------------------- */

    /// Validates the criteria and moves to `Loading`.
    ///
    /// On validation failure nothing changes except the recorded failure,
    /// and no ticket is issued, so no request can be made.
    pub fn begin_submit(&mut self) -> Result<SearchTicket, ValidationFailure> {
        let query = self.criteria.to_query().inspect_err(|v| {
            debug!(reason = %v, "submission blocked by validation");
            self.validation = Some(*v);
        })?;

        self.validation = None;
        self.seq += 1;
        self.state = SearchResultState::Loading;
        info!(seq = self.seq, keyword = %query.keyword, "search submitted");

        Ok(SearchTicket {
            seq: self.seq,
            query,
        })
    }

    /// Applies a search outcome. Returns `false` when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: subsidy_client::Result<Vec<SubsidySummary>>,
    ) -> bool {
        if ticket.seq != self.seq {
            debug!(stale = ticket.seq, current = self.seq, "ignoring stale search response");
            return false;
        }

        match outcome {
            Ok(results) => {
                info!(seq = ticket.seq, hits = results.len(), "search succeeded");
                self.state = SearchResultState::Success(results);
                self.results_open = true;
            }
            Err(err) => {
                error!(seq = ticket.seq, error = %err, "search failed");
                self.state = SearchResultState::Error(messages::SEARCH_FAILED.to_string());
            }
        }
        true
    }

    /// Validates, queries `source` and applies the outcome.
    pub async fn submit<S>(&mut self, source: &S) -> Result<(), ValidationFailure>
    where
        S: SubsidySource + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let outcome = source.search(ticket.query()).await;
        self.complete(ticket, outcome);
        Ok(())
    }

    /// Results of the last successful search as a card list.
    pub fn result_list(&self) -> Option<ResultList> {
        match &self.state {
            SearchResultState::Success(items) => Some(ResultList::new(items.clone())),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SearchResultState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
