//! Application layer services implementing the lookup and export logic.
//!
//! Services consume the [`crate::domain::archive::ArchiveClient`] trait and
//! provide a clean API for HTTP handlers and the export tool.
//!
//! # Available Services
//!
//! - [`services::exoplanet_service::ExoplanetService`] - Host-system planet lookup
//! - [`services::catalog_service::CatalogService`] - Full catalog download and cleaning

pub mod services;
