//! # Exoplanet Proxy
//!
//! A small Axum service in front of the NASA Exoplanet Archive. It accepts a
//! host-system name, sanitizes it, runs one ADQL prefix query against the
//! archive's TAP endpoint, and returns the planets that carry complete
//! orbital parameters.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Planet entities, ADQL builder and the archive client trait
//! - **Application Layer** ([`application`]) - Lookup and catalog export services
//! - **Infrastructure Layer** ([`infrastructure`]) - TAP HTTP client and export file writers
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `GET /api/exoplanets/{system}` - Planets of every host whose name starts with `system`
//! - `GET /api/popular-systems` - Curated lookup suggestions
//! - `GET /health` - Liveness check
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override defaults
//! export ARCHIVE_TIMEOUT_MS=10000
//! export RATE_LIMIT_PER_MINUTE=10
//!
//! # Start the service
//! cargo run
//!
//! # Download the full catalog to ./data
//! cargo run --bin archive-export -- download --output-dir data
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CatalogService, ExoplanetService};
    pub use crate::domain::archive::{AdqlQuery, ArchiveClient, ArchiveError, ArchiveRow};
    pub use crate::domain::entities::{PlanetRecord, PlanetarySystem, SystemName};
    pub use crate::error::AppError;
    pub use crate::infrastructure::archive::{ArchiveSettings, TapArchiveClient};
    pub use crate::routes::{RouterSettings, app_router, build_router};
    pub use crate::state::AppState;
}
