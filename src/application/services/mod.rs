//! Business logic services for the application layer.

pub mod catalog_service;
pub mod exoplanet_service;

pub use catalog_service::{CatalogService, CatalogSnapshot};
pub use exoplanet_service::ExoplanetService;
