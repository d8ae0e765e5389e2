//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod exoplanets;
pub mod fallback;
pub mod health;
pub mod popular_systems;

pub use exoplanets::exoplanets_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use popular_systems::popular_systems_handler;
