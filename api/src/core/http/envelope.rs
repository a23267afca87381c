//! JSON bodies the server authors itself.
//!
//! Proxied upstream payloads keep their own shapes; only errors and the
//! health check use these types.
//!
//! ```text
//! { "success": false,
//!   "error": { "code": "INVALID_KEYWORD", "message": "...",
//!              "details": [ { "param": "keyword", "hint": "..." } ] } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Stable, machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidKeyword,
    NotFound,
    UpstreamError,
    BadRequest,
    MethodNotAllowed,
    UnprocessableEntity,
    ClientError,
    ConfigError,
    BindError,
    ServerError,
}

impl ErrorCode {
    /// Code for a 4xx status produced outside the handlers (rejections,
    /// unknown routes).
    pub fn for_client_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ErrorCode::BadRequest,
            StatusCode::NOT_FOUND => ErrorCode::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => ErrorCode::MethodNotAllowed,
            StatusCode::UNPROCESSABLE_ENTITY => ErrorCode::UnprocessableEntity,
            _ => ErrorCode::ClientError,
        }
    }
}

/// Query parameters of `/api/subsidies` that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryParam {
    Keyword,
    Id,
}

/// Why one query parameter was rejected.
#[derive(Debug, Serialize)]
pub struct ParamIssue {
    pub param: QueryParam,
    pub hint: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ParamIssue>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    success: bool,
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Vec<ParamIssue>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code,
                message: message.into(),
                details,
            },
        }
    }

    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// `{ "success": true, "data": ... }`, used by `/health`.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T: Serialize> {
    success: bool,
    pub data: T,
}

impl<T: Serialize> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
