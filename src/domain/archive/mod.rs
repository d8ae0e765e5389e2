//! Contract with the upstream tabular archive.
//!
//! The archive is an opaque collaborator: it accepts an ADQL query and
//! answers with a JSON array of rows. This module defines what goes in
//! ([`AdqlQuery`]), what comes out ([`ArchiveRow`]), and the client trait
//! implemented by [`crate::infrastructure::archive::TapArchiveClient`].

mod client;
mod query;
mod row;

#[cfg(test)]
pub use client::MockArchiveClient;
pub use client::{ArchiveClient, ArchiveError};
pub use query::{AdqlQuery, PLANET_COLUMNS};
pub use row::ArchiveRow;
