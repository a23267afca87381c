//! Seam between the search controllers and the network.
//!
//! Controllers depend on [`SubsidySource`] instead of [`SubsidyClient`] so
//! they can be driven by an in-memory source in tests.

use std::{future::Future, pin::Pin};

use crate::{
    client::SubsidyClient,
    error_handler::Result,
    query::SearchQuery,
    types::{SubsidyDetail, SubsidySummary},
};

/// Boxed future returned by [`SubsidySource`] methods.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Anything that can answer list searches and detail lookups.
pub trait SubsidySource: Send + Sync {
    /// Listing search; records come back in upstream order.
    fn search<'a>(&'a self, query: &'a SearchQuery) -> SourceFuture<'a, Vec<SubsidySummary>>;

    /// Detail lookup for one identifier.
    fn detail<'a>(&'a self, id: &'a str) -> SourceFuture<'a, SubsidyDetail>;
}

impl SubsidySource for SubsidyClient {
    fn search<'a>(&'a self, query: &'a SearchQuery) -> SourceFuture<'a, Vec<SubsidySummary>> {
        Box::pin(self.search_subsidies(query))
    }

    fn detail<'a>(&'a self, id: &'a str) -> SourceFuture<'a, SubsidyDetail> {
        Box::pin(self.get_subsidy_detail(id))
    }
}
