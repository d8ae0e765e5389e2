//! Application error type and its HTTP representation.
//!
//! Every failure leaves the service as a JSON body with a human-readable
//! `error` message, a stable machine-readable `code`, and optional extra
//! fields (`suggestion`, `rawDataFound`) flattened next to them:
//!
//! ```json
//! {
//!   "error": "No exoplanet data found for system: Foo",
//!   "code": "not_found",
//!   "suggestion": "Try systems like \"Kepler-11\", ..."
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::domain::archive::ArchiveError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
    #[serde(flatten)]
    details: Map<String, Value>,
}

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller sent malformed or oversized input.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Nothing matched the request (unknown system, no usable rows, unknown route).
    #[error("{message}")]
    NotFound {
        code: &'static str,
        message: String,
        details: Value,
    },

    /// Local admission control rejected the request.
    #[error("{message}")]
    RateLimited { message: String },

    /// The archive reported its own rate limit.
    #[error("{message}")]
    UpstreamRateLimited { message: String },

    /// The archive could not be reached.
    #[error("{message}")]
    UpstreamUnavailable { message: String },

    /// The archive did not answer within the configured timeout.
    #[error("{message}")]
    UpstreamTimeout { message: String },

    /// Anything else. Details are logged, never returned.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            code: "not_found",
            message: message.into(),
            details,
        }
    }

    /// Rows came back but none carried complete orbital parameters.
    pub fn no_valid_data(raw_rows: usize) -> Self {
        Self::NotFound {
            code: "no_valid_data",
            message: "No valid planet data found with complete orbital parameters".to_string(),
            details: json!({ "rawDataFound": raw_rows }),
        }
    }

    pub fn route_not_found() -> Self {
        Self::NotFound {
            code: "route_not_found",
            message: "Endpoint not found".to_string(),
            details: json!({}),
        }
    }

    pub fn rate_limited() -> Self {
        Self::RateLimited {
            message: "Too many requests from this IP, please try again later.".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::RateLimited { .. } | Self::UpstreamRateLimited { .. } => {
                StatusCode::TOO_MANY_REQUESTS
            }
            Self::UpstreamUnavailable { .. } | Self::UpstreamTimeout { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { code, .. } => *code,
            Self::RateLimited { .. } => "rate_limited",
            Self::UpstreamRateLimited { .. } => "upstream_rate_limited",
            Self::UpstreamUnavailable { .. } => "upstream_unavailable",
            Self::UpstreamTimeout { .. } => "upstream_timeout",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl From<ArchiveError> for AppError {
    fn from(err: ArchiveError) -> Self {
        match err {
            ArchiveError::Timeout(after) => {
                tracing::warn!(timeout_ms = after.as_millis() as u64, "Archive request timed out");
                Self::UpstreamTimeout {
                    message: "NASA Exoplanet Archive did not respond in time. Please try again later."
                        .to_string(),
                }
            }
            ArchiveError::Unavailable(reason) => {
                tracing::warn!(%reason, "Archive unreachable");
                Self::UpstreamUnavailable {
                    message:
                        "Unable to connect to NASA Exoplanet Archive. Please try again later."
                            .to_string(),
                }
            }
            ArchiveError::RateLimited => {
                tracing::warn!("Archive rate limit hit");
                Self::UpstreamRateLimited {
                    message: "NASA API rate limit exceeded. Please try again later.".to_string(),
                }
            }
            other => {
                tracing::error!(error = %other, "Error fetching exoplanet data");
                Self::internal("Internal server error while fetching exoplanet data")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, details) = match self {
            AppError::Validation { message, details } => (message, details),
            AppError::NotFound {
                message, details, ..
            } => (message, details),
            AppError::RateLimited { message }
            | AppError::UpstreamRateLimited { message }
            | AppError::UpstreamUnavailable { message }
            | AppError::UpstreamTimeout { message }
            | AppError::Internal { message } => (message, Value::Null),
        };

        let details = match details {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let body = ErrorBody {
            error: message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_archive_errors_map_to_expected_statuses() {
        let cases = [
            (
                ArchiveError::Timeout(Duration::from_secs(10)),
                StatusCode::SERVICE_UNAVAILABLE,
                "upstream_timeout",
            ),
            (
                ArchiveError::Unavailable("connection refused".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
                "upstream_unavailable",
            ),
            (
                ArchiveError::RateLimited,
                StatusCode::TOO_MANY_REQUESTS,
                "upstream_rate_limited",
            ),
            (
                ArchiveError::Status(502),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
            (
                ArchiveError::Decode("expected value".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
        ];

        for (archive_error, status, code) in cases {
            let err = AppError::from(archive_error);
            assert_eq!(err.status_code(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = AppError::from(ArchiveError::Decode("secret parser state".to_string()));
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn test_no_valid_data_reports_raw_count() {
        let err = AppError::no_valid_data(3);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        match err {
            AppError::NotFound { details, .. } => assert_eq!(details["rawDataFound"], 3),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
