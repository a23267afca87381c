//! Projection of search results into cards, plus on-demand detail loading.

use subsidy_client::{SubsidyDetail, SubsidySource, SubsidySummary};
use tracing::{debug, error};

use crate::{
    detail_modal::DetailModal,
    format::{format_window, format_yen},
    messages,
};

/// Display-ready view of one summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsidyCard {
    pub id: String,
    pub title: String,
    pub area: String,
    pub max_limit: String,
    pub window: String,
    pub employees: String,
}

impl From<&SubsidySummary> for SubsidyCard {
    fn from(s: &SubsidySummary) -> Self {
        Self {
            id: s.id.clone(),
            title: s.display_title().to_string(),
            area: s.display_area().to_string(),
            max_limit: format_yen(s.subsidy_max_limit),
            window: format_window(
                s.acceptance_start_datetime.as_ref(),
                s.acceptance_end_datetime.as_ref(),
            ),
            employees: s.display_employees().to_string(),
        }
    }
}

/// Handle for one detail fetch. Only the most recent ticket is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    seq: u64,
    id: String,
}

impl DetailTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Ordered result cards with a list-scoped loading flag and inline error.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    items: Vec<SubsidySummary>,
    loading: bool,
    error: Option<&'static str>,
    modal: Option<DetailModal>,
    seq: u64,
}

impl ResultList {
    pub fn new(items: Vec<SubsidySummary>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// One card per item, input order preserved.
    pub fn cards(&self) -> Vec<SubsidyCard> {
        self.items.iter().map(SubsidyCard::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The "no results" message when there is nothing to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(messages::NO_RESULTS)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn modal(&self) -> Option<&DetailModal> {
        self.modal.as_ref()
    }

    /// Starts a detail fetch: shows the loading indicator, clears the inline
    /// error and closes any open modal.
    pub fn begin_view_detail(&mut self, id: &str) -> DetailTicket {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.modal = None;
        debug!(seq = self.seq, id, "detail requested");
        DetailTicket {
            seq: self.seq,
            id: id.to_string(),
        }
    }

    /// Applies a detail outcome. Returns `false` for superseded tickets.
    pub fn complete_detail(
        &mut self,
        ticket: DetailTicket,
        outcome: subsidy_client::Result<SubsidyDetail>,
    ) -> bool {
        if ticket.seq != self.seq {
            debug!(stale = ticket.seq, current = self.seq, "ignoring stale detail response");
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(detail) => {
                self.modal = Some(DetailModal::new(detail));
            }
            Err(err) => {
                error!(id = %ticket.id, error = %err, "failed to fetch subsidy detail");
                self.error = Some(messages::DETAIL_FAILED);
            }
        }
        true
    }

    /// Fetches the detail for `id` and opens the modal on success.
    pub async fn view_detail<S>(&mut self, source: &S, id: &str)
    where
        S: SubsidySource + ?Sized,
    {
        let ticket = self.begin_view_detail(id);
        let outcome = source.detail(ticket.id()).await;
        self.complete_detail(ticket, outcome);
    }

    /// Dismisses the modal; the record is dropped and never reused.
    pub fn close_detail(&mut self) {
        if let Some(modal) = self.modal.take() {
            modal.dismiss();
        }
    }
}
