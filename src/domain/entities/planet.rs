//! Planet entity built from one archive row.

use crate::domain::archive::ArchiveRow;

/// A planet with complete orbital parameters.
///
/// Units follow the archive: period in days, radius in Jupiter radii,
/// semi-major axis in AU, planet mass in Earth masses, stellar radius and
/// mass in solar units.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRecord {
    pub name: String,
    pub hostname: String,
    pub period: f64,
    pub radius: f64,
    pub semi_major_axis: f64,
    pub mass: Option<f64>,
    pub stellar_radius: Option<f64>,
    pub stellar_mass: Option<f64>,
}

impl PlanetRecord {
    /// Builds a record from an archive row.
    ///
    /// Returns `None` unless period, radius and semi-major axis are all
    /// present, finite and strictly positive. Optional measurements that are
    /// missing, non-finite or zero become `None`.
    pub fn from_row(row: &ArchiveRow) -> Option<Self> {
        Some(Self {
            period: required(row.number("pl_orbper"))?,
            radius: required(row.number("pl_radj"))?,
            semi_major_axis: required(row.number("pl_orbsmax"))?,
            name: row.text("pl_name").unwrap_or_default(),
            hostname: row.text("hostname").unwrap_or_default(),
            mass: optional(row.number("pl_masse")),
            stellar_radius: optional(row.number("st_rad")),
            stellar_mass: optional(row.number("st_mass")),
        })
    }
}

fn required(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn optional(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}
