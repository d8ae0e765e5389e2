//! Handler for host-system planet lookups.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::json;

use crate::api::dto::exoplanets::SystemResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the confirmed planets of every host whose name starts with `system_name`.
///
/// # Endpoint
///
/// `GET /api/exoplanets/{system_name}`
///
/// # Response
///
/// ```json
/// {
///   "system": "Kepler-11",
///   "planetCount": 6,
///   "dataSource": "NASA Exoplanet Archive",
///   "retrievedAt": "2025-01-01T12:00:00Z",
///   "planets": [
///     {
///       "name": "Kepler-11 b",
///       "hostname": "Kepler-11",
///       "period": 10.30375,
///       "radius": 0.161,
///       "semiMajorAxis": 0.091,
///       "mass": 1.9,
///       "stellarRadius": 1.065,
///       "stellarMass": 0.961
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: name empty, longer than 50 characters, or not valid UTF-8
/// - **404 Not Found**: no matching host, or no planet with complete orbital data
/// - **429 Too Many Requests**: the archive rate-limited us
/// - **503 Service Unavailable**: archive unreachable or timed out
/// - **500 Internal Server Error**: anything else
pub async fn exoplanets_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<SystemResponse>, AppError> {
    let Path(system_name) = path.map_err(|rejection| {
        AppError::bad_request(
            "Invalid system name.",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let system = state.exoplanet_service.get_exoplanets(&system_name).await?;

    Ok(Json(SystemResponse::from(system)))
}
