//! Handler for the curated systems list.

use axum::Json;

use crate::api::dto::popular_systems::{PopularSystemInfo, PopularSystemsResponse};
use crate::domain::entities::{POPULAR_SYSTEMS_NOTE, popular_systems};

/// Lists well-studied multi-planet systems worth looking up.
///
/// # Endpoint
///
/// `GET /api/popular-systems`
pub async fn popular_systems_handler() -> Json<PopularSystemsResponse> {
    Json(PopularSystemsResponse {
        systems: popular_systems()
            .iter()
            .map(PopularSystemInfo::from)
            .collect(),
        note: POPULAR_SYSTEMS_NOTE.to_string(),
    })
}
