use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use search_session::ValidationFailure;
use subsidy_client::SubsidyClientError;
use thiserror::Error;
use tracing::error;

use crate::core::{
    app_state::ConfigError,
    http::envelope::{ErrorCode, ErrorEnvelope, ParamIssue, QueryParam},
};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request ---
    #[error("invalid keyword: {0}")]
    InvalidKeyword(#[from] ValidationFailure),

    #[error("id must not be blank")]
    BlankId,

    #[error("subsidy not found: {0}")]
    NotFound(String),

    /// Upstream transport, status or decoding failure. The cause is logged,
    /// the response only says the upstream failed.
    #[error("upstream request failed")]
    Upstream(#[source] SubsidyClientError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidKeyword(_) | AppError::BlankId => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Config(_) => ErrorCode::ConfigError,
            AppError::Bind(_) => ErrorCode::BindError,
            AppError::Server(_) => ErrorCode::ServerError,
            AppError::InvalidKeyword(_) => ErrorCode::InvalidKeyword,
            AppError::BlankId => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Upstream(_) => ErrorCode::UpstreamError,
        }
    }

    fn details(&self) -> Vec<ParamIssue> {
        match self {
            AppError::InvalidKeyword(_) => vec![ParamIssue {
                param: QueryParam::Keyword,
                hint: "keyword must be 2 to 255 characters and not blank",
            }],
            AppError::BlankId => vec![ParamIssue {
                param: QueryParam::Id,
                hint: "id must name one subsidy, or be omitted to search",
            }],
            _ => Vec::new(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Upstream(cause) = &self {
            error!(error = %cause, "proxy upstream call failed");
        }

        let status = self.status_code();
        ErrorEnvelope::new(self.error_code(), self.to_string(), self.details())
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<SubsidyClientError> for AppError {
    fn from(err: SubsidyClientError) -> Self {
        match err {
            SubsidyClientError::NotFound(id) => AppError::NotFound(id),
            other => AppError::Upstream(other),
        }
    }
}
