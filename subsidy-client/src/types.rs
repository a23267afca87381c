//! Domain records returned by the subsidy API.
//!
//! The listing endpoint and the detail endpoints disagree on field names for
//! the same concepts (`title` vs `subsidy_name`, `target_area_search` vs
//! `target_area`). [`SubsidySummary`] keeps every variant as an explicit
//! optional field and resolves them through display helpers instead of
//! maintaining two overlapping shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown when an optional field is missing.
pub const UNDEFINED_LABEL: &str = "未定義";

/// Listing-page record for one subsidy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidySummary {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Name field used by the detail shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsidy_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_area_search: Option<String>,

    /// Area field used by the detail shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_area: Option<String>,

    /// Maximum award in yen.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub subsidy_max_limit: Option<u64>,

    #[serde(default, deserialize_with = "lenient_datetime")]
    pub acceptance_start_datetime: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient_datetime")]
    pub acceptance_end_datetime: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_number_of_employees: Option<String>,
}

/// First candidate that is present and not blank.
fn first_filled<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .filter_map(Option::as_deref)
        .find(|s| !s.trim().is_empty())
}

impl SubsidySummary {
    /// Title for cards and modal headers: `title`, then `subsidy_name`, then `name`.
    /// Blank values are skipped.
    pub fn display_title(&self) -> &str {
        first_filled(&[&self.title, &self.subsidy_name, &self.name]).unwrap_or(UNDEFINED_LABEL)
    }

    /// Target-area label: `target_area_search`, then `target_area`.
    pub fn display_area(&self) -> &str {
        first_filled(&[&self.target_area_search, &self.target_area]).unwrap_or(UNDEFINED_LABEL)
    }

    pub fn display_employees(&self) -> &str {
        first_filled(&[&self.target_number_of_employees]).unwrap_or(UNDEFINED_LABEL)
    }
}

/// Fully expanded record fetched on demand for one identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidyDetail {
    #[serde(flatten)]
    pub summary: SubsidySummary,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_industry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_copy: Option<String>,

    /// Long-form description (`summary` on the wire).
    #[serde(default, rename = "summary", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_area_detail: Option<String>,
}

impl SubsidyDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }
}

/// `resultset` block of the list envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub count: u64,
}

/// `metadata` block of the list envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMetadata {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub resultset: ResultSet,
}

/// Envelope returned by `GET /subsidies` and `GET /subsidies/id/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidyListResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ListMetadata>,
    pub result: Vec<T>,
}

/// Accepts RFC3339 strings, `null`, or empty strings. Unparseable values
/// become `None` rather than failing the whole response.
fn lenient_datetime<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

/// Accepts integer, float or numeric-string amounts.
fn lenient_amount<'de, D>(de: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(de)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(serde_json::Value::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_accepts_listing_shape() {
        let s: SubsidySummary = serde_json::from_value(json!({
            "id": "a0W5h00000",
            "name": "S-00001",
            "title": "ものづくり補助金",
            "target_area_search": "全国",
            "subsidy_max_limit": 12500000,
            "acceptance_start_datetime": "2024-04-01T00:00:00.000Z",
            "acceptance_end_datetime": null,
            "target_number_of_employees": "従業員の制約なし"
        }))
        .unwrap();

        assert_eq!(s.display_title(), "ものづくり補助金");
        assert_eq!(s.display_area(), "全国");
        assert_eq!(s.subsidy_max_limit, Some(12_500_000));
        assert!(s.acceptance_start_datetime.is_some());
        assert!(s.acceptance_end_datetime.is_none());
    }

    #[test]
    fn summary_falls_back_across_shapes() {
        let s: SubsidySummary = serde_json::from_value(json!({
            "id": "x",
            "subsidy_name": "事業承継補助金",
            "target_area": "東京都",
            "subsidy_max_limit": "",
            "acceptance_start_datetime": ""
        }))
        .unwrap();

        assert_eq!(s.display_title(), "事業承継補助金");
        assert_eq!(s.display_area(), "東京都");
        assert_eq!(s.subsidy_max_limit, None);
        assert_eq!(s.acceptance_start_datetime, None);
        assert_eq!(s.display_employees(), UNDEFINED_LABEL);
    }

    #[test]
    fn blank_fields_do_not_hide_fallbacks() {
        let s: SubsidySummary = serde_json::from_value(json!({
            "id": "x",
            "title": "",
            "subsidy_name": "事業承継補助金",
            "target_area_search": "  ",
            "target_area": "東京都"
        }))
        .unwrap();

        assert_eq!(s.display_title(), "事業承継補助金");
        assert_eq!(s.display_area(), "東京都");

        let all_blank: SubsidySummary =
            serde_json::from_value(json!({ "id": "y", "title": "", "name": " " })).unwrap();
        assert_eq!(all_blank.display_title(), UNDEFINED_LABEL);
    }

    #[test]
    fn detail_shares_summary_fields() {
        let record = json!({
            "id": "a0W5h00000",
            "name": "S-00002",
            "title": "小規模事業者持続化補助金",
            "target_area_search": "近畿地方",
            "subsidy_max_limit": 2000000,
            "acceptance_start_datetime": "2024-04-01T00:00:00.000Z",
            "acceptance_end_datetime": "2024-05-31T08:00:00.000Z",
            "target_number_of_employees": "20名以下",
            "purpose": "販路拡大・海外展開をしたい",
            "catch_copy": "販路開拓を支援",
            "summary": "概要"
        });

        let summary: SubsidySummary = serde_json::from_value(record.clone()).unwrap();
        let detail: SubsidyDetail = serde_json::from_value(record).unwrap();

        assert_eq!(summary, detail.summary);
        assert_eq!(summary.display_title(), detail.summary.display_title());
        assert_eq!(summary.display_area(), detail.summary.display_area());
    }

    #[test]
    fn detail_flattens_summary_and_renames_summary_text() {
        let d: SubsidyDetail = serde_json::from_value(json!({
            "id": "d1",
            "subsidy_name": "IT導入補助金",
            "purpose": "設備整備・IT導入したい",
            "target_industry": "製造業",
            "catch_copy": "ITで生産性向上",
            "summary": "長い説明",
            "target_area_detail": "全国",
            "subsidy_max_limit": 4500000.0
        }))
        .unwrap();

        assert_eq!(d.id(), "d1");
        assert_eq!(d.summary.display_title(), "IT導入補助金");
        assert_eq!(d.detail.as_deref(), Some("長い説明"));
        assert_eq!(d.summary.subsidy_max_limit, Some(4_500_000));
    }
}
