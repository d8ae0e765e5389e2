//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                     - Liveness check (not rate limited)
//! - `GET /api/exoplanets/{system}`    - Planet lookup (rate limited)
//! - `GET /api/popular-systems`        - Curated systems (rate limited)
//! - anything else (any method)        - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin allow-list for the browser frontend
//! - **Rate limiting** - Per-IP token bucket on `/api/*` (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::config::{DEFAULT_RATE_LIMIT_PER_MINUTE, default_origins};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// HTTP-level policy knobs, usually derived from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// When `true`, rate limiting reads client IP from `X-Forwarded-For` /
    /// `X-Real-IP` headers instead of the peer socket address; enable only
    /// when the service runs behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub rate_limit_per_minute: u32,
    pub allowed_origins: Vec<String>,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            behind_proxy: false,
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
            allowed_origins: default_origins("development"),
        }
    }
}

/// Builds the router with all routes and middleware, without path normalization.
pub fn build_router(state: AppState, settings: &RouterSettings) -> Router {
    let api_router = api::routes::api_routes();

    let api_router = if settings.behind_proxy {
        api_router.layer(rate_limit::proxied_layer(settings.rate_limit_per_minute))
    } else {
        api_router.layer(rate_limit::layer(settings.rate_limit_per_minute))
    };

    let api_router = api_router.layer(middleware::map_response(rate_limit::json_rejection));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .method_not_allowed_fallback(not_found_handler)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors::layer(&settings.allowed_origins))
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `settings` - rate limit, proxy and CORS settings
pub fn app_router(state: AppState, settings: &RouterSettings) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, settings))
}
