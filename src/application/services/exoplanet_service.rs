//! Host-system lookup service.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::archive::{AdqlQuery, ArchiveClient};
use crate::domain::entities::{PlanetRecord, PlanetarySystem, SystemName, lookup_suggestion};
use crate::error::AppError;

/// Looks up confirmed planets for a host-system name prefix.
///
/// Stateless: every call validates its input, performs at most one archive
/// request, and builds a fresh [`PlanetarySystem`].
pub struct ExoplanetService<C: ArchiveClient + ?Sized> {
    archive: Arc<C>,
}

impl<C: ArchiveClient + ?Sized> ExoplanetService<C> {
    /// Creates a new lookup service.
    pub fn new(archive: Arc<C>) -> Self {
        Self { archive }
    }

    /// Fetches the planets whose host name starts with `raw_name`.
    ///
    /// # Flow
    ///
    /// 1. Validate raw length (1-50 characters); no archive call on failure
    /// 2. Strip characters outside `[A-Za-z0-9 whitespace - .]`
    /// 3. Run a single prefix query against the archive
    /// 4. Drop rows without positive, finite period, radius and semi-major axis
    ///
    /// A name made only of disallowed characters sanitizes to `""` and
    /// therefore matches every host.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for empty or oversized names.
    /// Returns [`AppError::NotFound`] (`not_found`) when the archive has no rows,
    /// and (`no_valid_data`) when none of the rows are usable.
    /// Archive failures map to the upstream variants, see [`AppError::from`].
    pub async fn get_exoplanets(&self, raw_name: &str) -> Result<PlanetarySystem, AppError> {
        let system = SystemName::parse(raw_name)?;
        info!(system = %system, "Fetching data for system");

        let query = AdqlQuery::planets_for_host_prefix(&system);
        let rows = self.archive.fetch_rows(&query).await?;

        if rows.is_empty() {
            return Err(AppError::not_found(
                format!("No exoplanet data found for system: {raw_name}"),
                json!({ "suggestion": lookup_suggestion() }),
            ));
        }

        let planets: Vec<PlanetRecord> = rows.iter().filter_map(PlanetRecord::from_row).collect();

        if planets.is_empty() {
            return Err(AppError::no_valid_data(rows.len()));
        }

        if planets.len() < rows.len() {
            debug!(
                system = %system,
                dropped = rows.len() - planets.len(),
                "Dropped rows with incomplete orbital parameters"
            );
        }

        info!(
            system = %system,
            planet_count = planets.len(),
            "Successfully retrieved planets"
        );

        Ok(PlanetarySystem::new(
            system.into_inner(),
            planets,
            Utc::now(),
        ))
    }
}
