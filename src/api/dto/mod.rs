//! Data Transfer Objects for API responses.
//!
//! All DTOs use Serde for JSON serialization. Field names follow the
//! camelCase convention expected by the frontend.

pub mod exoplanets;
pub mod health;
pub mod popular_systems;
