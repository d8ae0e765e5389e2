//! Handler for health check endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::health::HealthResponse;

/// Reports that the process is up.
///
/// The archive is not probed; an upstream outage shows up as 503 on the
/// lookup endpoint instead.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "OK", "timestamp": "2025-01-01T12:00:00Z", "version": "0.1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
