//! Wire form of a subsidy search.
//!
//! [`SearchQuery`] holds exactly the eight string parameters accepted by
//! `GET /subsidies`. It does not validate anything; typed criteria are built
//! and checked by the caller and then lowered into this shape.

use serde::{Deserialize, Serialize};

/// Parameter names in the order they are serialized.
pub const QUERY_KEYS: [&str; 8] = [
    "keyword",
    "sort",
    "order",
    "acceptance",
    "use_purpose",
    "industry",
    "target_number_of_employees",
    "target_area_search",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
    pub sort: String,
    pub order: String,
    pub acceptance: String,
    pub use_purpose: String,
    pub industry: String,
    pub target_number_of_employees: String,
    pub target_area_search: String,
}

impl SearchQuery {
    /// Key/value pairs in [`QUERY_KEYS`] order. Empty values are kept.
    pub fn pairs(&self) -> [(&'static str, &str); 8] {
        [
            ("keyword", &self.keyword),
            ("sort", &self.sort),
            ("order", &self.order),
            ("acceptance", &self.acceptance),
            ("use_purpose", &self.use_purpose),
            ("industry", &self.industry),
            ("target_number_of_employees", &self.target_number_of_employees),
            ("target_area_search", &self.target_area_search),
        ]
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Builds a query from decoded key/value pairs, ignoring unknown keys.
    ///
    /// The last occurrence of a key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut q = SearchQuery::default();
        for (k, v) in pairs {
            let slot = match k.as_ref() {
                "keyword" => &mut q.keyword,
                "sort" => &mut q.sort,
                "order" => &mut q.order,
                "acceptance" => &mut q.acceptance,
                "use_purpose" => &mut q.use_purpose,
                "industry" => &mut q.industry,
                "target_number_of_employees" => &mut q.target_number_of_employees,
                "target_area_search" => &mut q.target_area_search,
                _ => continue,
            };
            *slot = v.into();
        }
        q
    }
}
