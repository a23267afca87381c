//! Response decoders.
//!
//! The list endpoint wraps records in a `metadata`/`result` envelope while
//! the local detail proxy returns a bare object. Each shape gets its own
//! decoder; they are deliberately not merged.

use crate::{
    error_handler::{Result, SubsidyClientError},
    types::{SubsidyDetail, SubsidyListResponse, SubsidySummary},
};

/// Decodes `GET /subsidies` (`{ metadata, result: [...] }`).
pub fn decode_list_response(body: &[u8]) -> Result<SubsidyListResponse<SubsidySummary>> {
    serde_json::from_slice(body).map_err(|e| {
        SubsidyClientError::Decode(format!(
            "serde error: {e}; expected `{{ metadata, result: [...] }}`"
        ))
    })
}

/// Decodes upstream `GET /subsidies/id/{id}`: the list envelope with a single
/// detail record. An empty `result` means the identifier is unknown.
pub fn decode_upstream_detail_response(id: &str, body: &[u8]) -> Result<SubsidyDetail> {
    let envelope: SubsidyListResponse<SubsidyDetail> =
        serde_json::from_slice(body).map_err(|e| {
            SubsidyClientError::Decode(format!(
                "serde error: {e}; expected `{{ metadata, result: [detail] }}`"
            ))
        })?;

    envelope
        .result
        .into_iter()
        .next()
        .ok_or_else(|| SubsidyClientError::NotFound(id.to_string()))
}

/// Decodes the local proxy `GET /api/subsidies?id=...` (bare detail object).
pub fn decode_detail_response(body: &[u8]) -> Result<SubsidyDetail> {
    serde_json::from_slice(body).map_err(|e| {
        SubsidyClientError::Decode(format!("serde error: {e}; expected a bare detail object"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_preserves_result_order() {
        let body = br#"{
            "metadata": { "type": "application/json", "resultset": { "count": 3 } },
            "result": [ { "id": "c" }, { "id": "a" }, { "id": "b" } ]
        }"#;
        let out = decode_list_response(body).unwrap();
        let ids: Vec<&str> = out.result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(out.metadata.unwrap().resultset.count, 3);
    }

    #[test]
    fn list_without_metadata_is_accepted() {
        let out = decode_list_response(br#"{ "result": [] }"#).unwrap();
        assert!(out.result.is_empty());
        assert!(out.metadata.is_none());
    }

    #[test]
    fn bare_detail_is_not_an_envelope() {
        assert!(decode_detail_response(br#"{ "id": "x", "purpose": "p" }"#).is_ok());
        let err = decode_detail_response(br#"{ "result": [ { "id": "x" } ] }"#).unwrap_err();
        assert!(matches!(err, SubsidyClientError::Decode(_)));
    }

    #[test]
    fn upstream_detail_empty_result_is_not_found() {
        let err = decode_upstream_detail_response("zz", br#"{ "result": [] }"#).unwrap_err();
        assert!(matches!(err, SubsidyClientError::NotFound(id) if id == "zz"));
    }
}
