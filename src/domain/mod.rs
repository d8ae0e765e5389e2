//! Domain layer containing the data model and the archive contract.
//!
//! # Architecture
//!
//! - [`entities`] - Planets, systems and catalog rows
//! - [`archive`] - Query builder, raw rows and the [`archive::ArchiveClient`] trait
//!
//! The domain layer has no dependency on HTTP or on a concrete archive
//! client; [`crate::infrastructure`] provides the implementation.

pub mod archive;
pub mod entities;
