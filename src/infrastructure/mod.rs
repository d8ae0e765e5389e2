//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`archive`] - HTTP client for the NASA Exoplanet Archive TAP service
//! - [`export`] - CSV / JSON writers used by the catalog export tool

pub mod archive;
pub mod export;
