//! Rate limiting middleware using token bucket algorithm.
//!
//! This is the admission check in front of the lookup endpoints: requests
//! over budget are rejected before any handler or archive call runs.

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, RETRY_AFTER};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::error::AppError;

/// Milliseconds between two replenished tokens for a per-minute budget.
fn replenish_interval_ms(requests_per_minute: u32) -> u64 {
    (60_000 / u64::from(requests_per_minute.max(1))).max(1)
}

/// Creates a per-IP rate limiter keyed on the socket peer address.
///
/// # Limits
///
/// - **Burst**: `requests_per_minute` requests
/// - **Rate**: one request replenished every `60s / requests_per_minute`
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/exoplanets/{system_name}", get(exoplanets_handler))
///     .layer(rate_limit::layer(10));
/// ```
pub fn layer(
    requests_per_minute: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms(requests_per_minute))
            .burst_size(requests_per_minute.max(1))
            .finish()
            .expect("non-zero rate limit quota"),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], but keyed on `X-Forwarded-For`, `X-Real-IP` or
/// `Forwarded`, falling back to the peer address.
///
/// Use only behind a trusted reverse proxy; clients can forge these headers.
pub fn proxied_layer(
    requests_per_minute: u32,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_millisecond(replenish_interval_ms(requests_per_minute))
            .burst_size(requests_per_minute.max(1))
            .finish()
            .expect("non-zero rate limit quota"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rewrites the limiter's plain-text 429 into the JSON error shape.
///
/// JSON 429s produced by handlers (archive rate limit) pass through untouched.
/// `Retry-After` from the limiter is preserved.
pub async fn json_rejection(response: Response) -> Response {
    if response.status() != StatusCode::TOO_MANY_REQUESTS || is_json(&response) {
        return response;
    }

    let retry_after = response.headers().get(RETRY_AFTER).cloned();

    let mut rejection = AppError::rate_limited().into_response();
    if let Some(value) = retry_after {
        rejection.headers_mut().insert(RETRY_AFTER, value);
    }

    rejection
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v: &HeaderValue| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replenish_interval() {
        assert_eq!(replenish_interval_ms(10), 6_000);
        assert_eq!(replenish_interval_ms(1), 60_000);
        assert_eq!(replenish_interval_ms(0), 60_000);
        assert_eq!(replenish_interval_ms(60_000), 1);
        assert_eq!(replenish_interval_ms(u32::MAX), 1);
    }

    #[tokio::test]
    async fn test_plain_429_becomes_json() {
        let plain = Response::builder()
            .status(StatusCode::TOO_MANY_REQUESTS)
            .header(RETRY_AFTER, "6")
            .body(Body::from("Too Many Requests! Wait for 6s"))
            .unwrap();

        let converted = json_rejection(plain).await;

        assert_eq!(converted.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(is_json(&converted));
        assert_eq!(converted.headers().get(RETRY_AFTER).unwrap(), "6");
    }

    #[tokio::test]
    async fn test_other_responses_pass_through() {
        let ok = Response::builder()
            .status(StatusCode::OK)
            .body(Body::from("fine"))
            .unwrap();

        let passed = json_rejection(ok).await;

        assert_eq!(passed.status(), StatusCode::OK);
        assert!(!is_json(&passed));
    }
}
