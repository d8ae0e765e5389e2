//! Result of a host-system lookup.

use chrono::{DateTime, Utc};

use super::PlanetRecord;

/// Provenance label attached to every lookup result.
pub const DATA_SOURCE: &str = "NASA Exoplanet Archive";

/// Planets retained for one host-system lookup, in archive order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetarySystem {
    /// Sanitized name the lookup was made with.
    pub system: String,
    pub planets: Vec<PlanetRecord>,
    pub retrieved_at: DateTime<Utc>,
}

impl PlanetarySystem {
    pub fn new(system: String, planets: Vec<PlanetRecord>, retrieved_at: DateTime<Utc>) -> Self {
        Self {
            system,
            planets,
            retrieved_at,
        }
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn data_source(&self) -> &'static str {
        DATA_SOURCE
    }
}
