//! Core domain entities.
//!
//! Entities are plain data structures built fresh for each request (or each
//! export run) and never persisted.
//!
//! # Entity Types
//!
//! - [`SystemName`] - A validated, sanitized host-system name
//! - [`PlanetRecord`] - A planet with complete orbital parameters
//! - [`PlanetarySystem`] - The planets retained for one lookup
//! - [`PopularSystem`] - A curated lookup suggestion
//! - [`CatalogPlanet`] - A cleaned row of the full catalog export

pub mod catalog;
pub mod planet;
pub mod planetary_system;
pub mod popular_system;
pub mod system_name;

pub use catalog::{CatalogMetadata, CatalogPlanet, CatalogSummary, clean_catalog};
pub use planet::PlanetRecord;
pub use planetary_system::{DATA_SOURCE, PlanetarySystem};
pub use popular_system::{POPULAR_SYSTEMS_NOTE, PopularSystem, lookup_suggestion, popular_systems};
pub use system_name::SystemName;
