//! DTOs for the host-system lookup endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{PlanetRecord, PlanetarySystem};

/// Planets of one host system.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemResponse {
    pub system: String,
    pub planet_count: usize,
    pub data_source: String,
    pub retrieved_at: DateTime<Utc>,
    pub planets: Vec<PlanetInfo>,
}

/// One planet. Missing optional measurements serialize as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetInfo {
    pub name: String,
    pub hostname: String,
    /// Orbital period in days.
    pub period: f64,
    /// Planet radius in Jupiter radii.
    pub radius: f64,
    /// Semi-major axis in AU.
    pub semi_major_axis: f64,
    /// Planet mass in Earth masses.
    pub mass: Option<f64>,
    /// Host star radius in solar radii.
    pub stellar_radius: Option<f64>,
    /// Host star mass in solar masses.
    pub stellar_mass: Option<f64>,
}

impl From<PlanetRecord> for PlanetInfo {
    fn from(planet: PlanetRecord) -> Self {
        Self {
            name: planet.name,
            hostname: planet.hostname,
            period: planet.period,
            radius: planet.radius,
            semi_major_axis: planet.semi_major_axis,
            mass: planet.mass,
            stellar_radius: planet.stellar_radius,
            stellar_mass: planet.stellar_mass,
        }
    }
}

impl From<PlanetarySystem> for SystemResponse {
    fn from(system: PlanetarySystem) -> Self {
        Self {
            planet_count: system.planet_count(),
            data_source: system.data_source().to_string(),
            retrieved_at: system.retrieved_at,
            system: system.system,
            planets: system.planets.into_iter().map(PlanetInfo::from).collect(),
        }
    }
}
