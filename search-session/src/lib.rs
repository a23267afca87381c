//! Search-page state: the form controller, the result list and the detail
//! modal, independent of how they are rendered.
//!
//! All network access goes through [`subsidy_client::SubsidySource`].

mod controller;
mod criteria;
mod detail_modal;
pub mod format;
pub mod messages;
mod result_list;

#[cfg(test)]
mod test_support;

pub use controller::{PresentationMode, SearchController, SearchResultState, SearchTicket};
pub use criteria::{
    KEYWORD_MAX_CHARS, KEYWORD_MIN_CHARS, SearchCriteria, ValidationFailure,
    validate_keyword,
};
pub use detail_modal::{DetailModal, DetailRow};
pub use result_list::{DetailTicket, ResultList, SubsidyCard};
