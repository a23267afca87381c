//! Unified error handling for `subsidy-client`.
//!
//! A single top-level error [`SubsidyClientError`] covers the whole library;
//! configuration and request failures are grouped in nested enums. All
//! messages carry the `[Subsidy Client]` prefix so they are easy to attribute
//! in logs. None of these messages are meant for end users.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

pub type Result<T> = std::result::Result<T, SubsidyClientError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SubsidyClientError {
    /// Invalid or missing configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport failure or non-success HTTP status.
    #[error(transparent)]
    Request(#[from] RequestFailure),

    /// The upstream reported that the identifier does not exist.
    #[error("[Subsidy Client] subsidy not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected envelope.
    #[error("[Subsidy Client] failed to decode response: {0}")]
    Decode(String),
}

impl SubsidyClientError {
    /// True for failures a caller should treat as "the request failed"
    /// (transport, status and decoding problems).
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            SubsidyClientError::Request(_) | SubsidyClientError::Decode(_)
        )
    }
}

impl From<reqwest::Error> for SubsidyClientError {
    fn from(e: reqwest::Error) -> Self {
        SubsidyClientError::Request(RequestFailure::from(e))
    }
}

/* ------------------------------------------------------------------------- */
/* Request failures                                                          */
/* ------------------------------------------------------------------------- */

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RequestFailure {
    /// Upstream answered with a non-2xx status.
    #[error("[Subsidy Client] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        /// First characters of the response body.
        snippet: String,
    },

    /// The configured timeout elapsed.
    #[error("[Subsidy Client] request timed out")]
    Timeout,

    /// DNS, connect, TLS or body-read failure.
    #[error("[Subsidy Client] transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for RequestFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RequestFailure::Timeout
        } else {
            RequestFailure::Transport(e)
        }
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse.
    #[error("[Subsidy Client] invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// Value had the wrong format (e.g. a URL without scheme).
    #[error("[Subsidy Client] invalid format in {var}: {reason}")]
    InvalidFormat {
        var: &'static str,
        reason: &'static str,
    },

    /// The HTTP client could not be built.
    #[error("[Subsidy Client] failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/* ------------------------------------------------------------------------- */
/* Env / validation helpers                                                  */
/* ------------------------------------------------------------------------- */

/// Reads an env var, falling back to `default` when unset or blank.
pub fn env_or(name: &'static str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<u64>().map(Some).map_err(|_| {
            ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            }
            .into()
        }),
        _ => Ok(None),
    }
}

/// Validates that a base URL starts with `http://` or `https://`.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}
