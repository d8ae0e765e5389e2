//! API route configuration.
//!
//! Every route here sits behind the per-IP rate limiter configured in
//! [`crate::routes`].

use crate::api::handlers::{exoplanets_handler, not_found_handler, popular_systems_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public read-only API routes.
///
/// # Endpoints
///
/// - `GET /exoplanets/{system_name}` - Confirmed planets for a host-name prefix
/// - `GET /popular-systems`          - Curated list of systems worth looking up
///
/// Other methods on these paths get the same JSON 404 as unknown paths.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/exoplanets/{system_name}", get(exoplanets_handler))
        .route("/popular-systems", get(popular_systems_handler))
        .method_not_allowed_fallback(not_found_handler)
}
