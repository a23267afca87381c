//! In-memory [`SubsidySource`] for controller tests.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use subsidy_client::{
    RequestFailure, SearchQuery, SourceFuture, SubsidyClientError, SubsidyDetail, SubsidySource,
    SubsidySummary,
};

pub fn summary(id: &str, title: &str) -> SubsidySummary {
    SubsidySummary {
        id: id.to_string(),
        name: None,
        title: Some(title.to_string()),
        subsidy_name: None,
        target_area_search: Some("全国".to_string()),
        target_area: None,
        subsidy_max_limit: Some(3_000_000),
        acceptance_start_datetime: None,
        acceptance_end_datetime: None,
        target_number_of_employees: Some("20名以下".to_string()),
    }
}

pub fn detail(id: &str, title: &str) -> SubsidyDetail {
    SubsidyDetail {
        summary: summary(id, title),
        purpose: Some("新たな事業を行いたい".to_string()),
        target_industry: Some("製造業".to_string()),
        catch_copy: Some("キャッチコピー".to_string()),
        detail: Some("概要".to_string()),
        target_area_detail: Some("全国".to_string()),
    }
}

#[derive(Default)]
pub struct FakeSource {
    results: Vec<SubsidySummary>,
    fail: bool,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    queries: Mutex<Vec<SearchQuery>>,
}

impl FakeSource {
    pub fn with_results(results: Vec<SubsidySummary>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn failure() -> SubsidyClientError {
        SubsidyClientError::Request(RequestFailure::Timeout)
    }
}

impl SubsidySource for FakeSource {
    fn search<'a>(&'a self, query: &'a SearchQuery) -> SourceFuture<'a, Vec<SubsidySummary>> {
        Box::pin(async move {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.clone());
            if self.fail {
                Err(Self::failure())
            } else {
                Ok(self.results.clone())
            }
        })
    }

    fn detail<'a>(&'a self, id: &'a str) -> SourceFuture<'a, SubsidyDetail> {
        Box::pin(async move {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(Self::failure())
            } else {
                Ok(detail(id, "詳細"))
            }
        })
    }
}
