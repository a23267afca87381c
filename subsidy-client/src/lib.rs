//! Typed client for the jGrants public subsidy API.
//!
//! - [`SearchQuery`] is the eight-parameter wire contract of `GET /subsidies`;
//!   [`catalog`] holds the fixed enumerations its values come from.
//! - [`SubsidyClient`] issues list searches upstream and detail lookups
//!   through the local proxy route, decoding each response shape with its
//!   own decoder.
//! - [`SubsidySource`] is the trait controllers depend on.
//!
//! # Example
//!
//! ```no_run
//! use subsidy_client::{ClientConfig, SearchQuery, SubsidyClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SubsidyClient::new(ClientConfig::default())?;
//! let query = SearchQuery {
//!     keyword: "小規模事業者".into(),
//!     sort: "created_date".into(),
//!     order: "DESC".into(),
//!     acceptance: "1".into(),
//!     industry: "製造業".into(),
//!     ..Default::default()
//! };
//! for s in client.search_subsidies(&query).await? {
//!     println!("{} {}", s.id, s.display_title());
//! }
//! # Ok(()) }
//! ```

pub mod catalog;
mod client;
mod config;
pub mod decode;
mod error_handler;
mod query;
mod source;
pub mod telemetry;
mod types;

pub use client::SubsidyClient;
pub use config::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_PROXY_BASE_URL};
pub use error_handler::{ConfigError, RequestFailure, Result, SubsidyClientError};
pub use query::{QUERY_KEYS, SearchQuery};
pub use source::{SourceFuture, SubsidySource};
pub use types::{
    ListMetadata, ResultSet, SubsidyDetail, SubsidyListResponse, SubsidySummary, UNDEFINED_LABEL,
};
