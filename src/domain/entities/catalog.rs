//! Full planet catalog as exported by the `archive-export` tool.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::archive::ArchiveRow;

/// Earth radii per Jupiter radius.
pub const EARTH_RADII_PER_JUPITER_RADIUS: f64 = 11.209;

/// Source label written into export metadata.
pub const CATALOG_DATA_SOURCE: &str =
    "NASA Exoplanet Archive - Planetary Systems Composite Parameters";

/// One cleaned catalog row. Serialized field names match archive columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPlanet {
    #[serde(rename = "pl_name")]
    pub name: String,
    pub hostname: String,
    #[serde(rename = "sy_snum")]
    pub star_count: Option<i64>,
    #[serde(rename = "sy_pnum")]
    pub planet_count: Option<i64>,
    #[serde(rename = "discoverymethod")]
    pub discovery_method: Option<String>,
    #[serde(rename = "disc_year")]
    pub discovery_year: Option<i64>,
    #[serde(rename = "pl_orbper")]
    pub period: f64,
    #[serde(rename = "pl_orbsmax")]
    pub semi_major_axis: f64,
    #[serde(rename = "pl_rade")]
    pub radius_earth: f64,
    #[serde(rename = "pl_radj")]
    pub radius_jupiter: f64,
    #[serde(rename = "pl_masse")]
    pub mass_earth: Option<f64>,
    #[serde(rename = "pl_massj")]
    pub mass_jupiter: Option<f64>,
    #[serde(rename = "pl_eqt")]
    pub equilibrium_temperature: Option<f64>,
    #[serde(rename = "st_rad")]
    pub stellar_radius: Option<f64>,
    #[serde(rename = "st_mass")]
    pub stellar_mass: Option<f64>,
    #[serde(rename = "st_teff")]
    pub stellar_temperature: Option<f64>,
    #[serde(rename = "sy_dist")]
    pub distance: Option<f64>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub download_date: String,
}

/// Column order of an exported catalog file.
pub const CATALOG_CSV_COLUMNS: [&str; 20] = [
    "pl_name",
    "hostname",
    "sy_snum",
    "sy_pnum",
    "discoverymethod",
    "disc_year",
    "pl_orbper",
    "pl_orbsmax",
    "pl_rade",
    "pl_radj",
    "pl_masse",
    "pl_massj",
    "pl_eqt",
    "st_rad",
    "st_mass",
    "st_teff",
    "sy_dist",
    "ra",
    "dec",
    "download_date",
];

impl CatalogPlanet {
    /// Cleans one archive row.
    ///
    /// Rows need a name, host, positive period and semi-major axis, and at
    /// least one radius measurement; the other radius is derived from it.
    pub fn from_row(row: &ArchiveRow, downloaded_at: DateTime<Utc>) -> Option<Self> {
        let name = row.text("pl_name")?;
        let hostname = row.text("hostname")?;
        let period = positive(row.number("pl_orbper"))?;
        let semi_major_axis = positive(row.number("pl_orbsmax"))?;

        let (radius_earth, radius_jupiter) = match (
            present(row.number("pl_rade")),
            present(row.number("pl_radj")),
        ) {
            (Some(earth), Some(jupiter)) => (earth, jupiter),
            (Some(earth), None) => (earth, earth / EARTH_RADII_PER_JUPITER_RADIUS),
            (None, Some(jupiter)) => (jupiter * EARTH_RADII_PER_JUPITER_RADIUS, jupiter),
            (None, None) => return None,
        };

        Some(Self {
            name,
            hostname,
            star_count: row.integer("sy_snum"),
            planet_count: row.integer("sy_pnum"),
            discovery_method: row.text("discoverymethod"),
            discovery_year: row.integer("disc_year"),
            period,
            semi_major_axis,
            radius_earth,
            radius_jupiter,
            mass_earth: finite(row.number("pl_masse")),
            mass_jupiter: finite(row.number("pl_massj")),
            equilibrium_temperature: finite(row.number("pl_eqt")),
            stellar_radius: finite(row.number("st_rad")),
            stellar_mass: finite(row.number("st_mass")),
            stellar_temperature: finite(row.number("st_teff")),
            distance: finite(row.number("sy_dist")),
            ra: finite(row.number("ra")),
            dec: finite(row.number("dec")),
            download_date: downloaded_at.to_rfc3339(),
        })
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Cleans every row and sorts the survivors by host name, then period.
pub fn clean_catalog(rows: &[ArchiveRow], downloaded_at: DateTime<Utc>) -> Vec<CatalogPlanet> {
    let mut planets: Vec<CatalogPlanet> = rows
        .iter()
        .filter_map(|row| CatalogPlanet::from_row(row, downloaded_at))
        .collect();

    planets.sort_by(|a, b| {
        a.hostname
            .cmp(&b.hostname)
            .then(a.period.total_cmp(&b.period))
    });

    planets
}

/// Aggregate figures printed after a catalog download.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub total_records: usize,
    pub valid_records: usize,
    pub unique_systems: usize,
    pub discovery_years: Option<(i64, i64)>,
    pub period_range: Option<(f64, f64)>,
    pub semi_major_axis_range: Option<(f64, f64)>,
    /// Up to ten hosts with the most planets, largest first.
    pub top_systems: Vec<(String, usize)>,
}

impl CatalogSummary {
    pub fn new(total_records: usize, planets: &[CatalogPlanet]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for planet in planets {
            *counts.entry(planet.hostname.as_str()).or_default() += 1;
        }

        let mut top_systems: Vec<(String, usize)> = counts
            .iter()
            .map(|(host, count)| (host.to_string(), *count))
            .collect();
        top_systems.sort_by(|a, b| b.1.cmp(&a.1));
        top_systems.truncate(10);

        let years = planets.iter().filter_map(|p| p.discovery_year);
        let discovery_years = years.clone().min().zip(years.max());

        Self {
            total_records,
            valid_records: planets.len(),
            unique_systems: counts.len(),
            discovery_years,
            period_range: range(planets.iter().map(|p| p.period)),
            semi_major_axis_range: range(planets.iter().map(|p| p.semi_major_axis)),
            top_systems,
        }
    }
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Contents of the `metadata.json` file written next to an export.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogMetadata {
    pub download_date: String,
    pub total_records: usize,
    pub valid_records: usize,
    pub unique_systems: usize,
    pub data_source: &'static str,
    pub api_url: String,
    pub columns: Vec<&'static str>,
}

impl CatalogMetadata {
    pub fn new(summary: &CatalogSummary, downloaded_at: DateTime<Utc>, api_url: String) -> Self {
        let columns = if summary.valid_records > 0 {
            CATALOG_CSV_COLUMNS.to_vec()
        } else {
            Vec::new()
        };

        Self {
            download_date: downloaded_at.to_rfc3339(),
            total_records: summary.total_records,
            valid_records: summary.valid_records,
            unique_systems: summary.unique_systems,
            data_source: CATALOG_DATA_SOURCE,
            api_url,
            columns,
        }
    }
}
