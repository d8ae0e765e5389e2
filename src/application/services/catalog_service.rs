//! Bulk catalog download service used by the `archive-export` tool.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::domain::archive::{AdqlQuery, ArchiveClient, ArchiveError};
use crate::domain::entities::{CatalogPlanet, CatalogSummary, clean_catalog};

/// A cleaned catalog download.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub downloaded_at: DateTime<Utc>,
    /// Rows returned by the archive before cleaning.
    pub total_records: usize,
    pub planets: Vec<CatalogPlanet>,
}

impl CatalogSnapshot {
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::new(self.total_records, &self.planets)
    }
}

/// Downloads every confirmed planet in one archive request.
pub struct CatalogService<C: ArchiveClient + ?Sized> {
    archive: Arc<C>,
}

impl<C: ArchiveClient + ?Sized> CatalogService<C> {
    pub fn new(archive: Arc<C>) -> Self {
        Self { archive }
    }

    /// Fetches and cleans the full catalog.
    ///
    /// # Errors
    ///
    /// Propagates the [`ArchiveError`] of the single archive request.
    pub async fn download(&self) -> Result<CatalogSnapshot, ArchiveError> {
        let query = AdqlQuery::confirmed_planet_catalog();
        let rows = self.archive.fetch_rows(&query).await?;
        info!(records = rows.len(), "Downloaded catalog records");

        let downloaded_at = Utc::now();
        let planets = clean_catalog(&rows, downloaded_at);
        info!(valid = planets.len(), "Cleaned catalog records");

        Ok(CatalogSnapshot {
            downloaded_at,
            total_records: rows.len(),
            planets,
        })
    }
}
