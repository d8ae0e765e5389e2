//! ADQL query construction.
//!
//! The TAP sync endpoint only accepts a complete ADQL string, so host names
//! are spliced into the text. The only way to build a host-filtered query is
//! through [`SystemName`], whose alphabet excludes quotes and other ADQL
//! metacharacters. That restriction narrows what can be injected; it is not
//! an escaping scheme.

use crate::domain::entities::SystemName;

/// Table holding one row per confirmed planet with composite parameters.
const PLANET_TABLE: &str = "pscomppars";

/// Columns projected by the per-system lookup, in archive naming.
pub const PLANET_COLUMNS: [&str; 8] = [
    "pl_name",
    "hostname",
    "pl_orbper",
    "pl_radj",
    "pl_orbsmax",
    "pl_masse",
    "st_rad",
    "st_mass",
];

/// Columns projected by the full catalog download.
const CATALOG_COLUMNS: [&str; 19] = [
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
];

/// A whitespace-collapsed ADQL query ready to be sent as a URL parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdqlQuery {
    text: String,
}

impl AdqlQuery {
    /// Planets whose host name starts with `system`.
    ///
    /// Orbital period, Jupiter radius and semi-major axis must be present and
    /// positive on the archive side as well; the service re-checks them.
    pub fn planets_for_host_prefix(system: &SystemName) -> Self {
        let text = format!(
            "
            select {columns}
            from {table}
            where hostname like '{prefix}%'
            and pl_orbper is not null
            and pl_radj is not null
            and pl_orbsmax is not null
            and pl_orbper > 0
            and pl_radj > 0
            and pl_orbsmax > 0
            ",
            columns = PLANET_COLUMNS.join(","),
            table = PLANET_TABLE,
            prefix = system.as_str(),
        );

        Self::from_text(&text)
    }

    /// Every confirmed planet with an orbit and at least one radius measurement.
    pub fn confirmed_planet_catalog() -> Self {
        let text = format!(
            "
            SELECT {columns}
            FROM {table}
            WHERE pl_orbper IS NOT NULL
                AND pl_orbsmax IS NOT NULL
                AND (pl_radj IS NOT NULL OR pl_rade IS NOT NULL)
                AND hostname IS NOT NULL
            ORDER BY hostname, pl_orbper
            ",
            columns = CATALOG_COLUMNS.join(", "),
            table = PLANET_TABLE,
        );

        Self::from_text(&text)
    }

    fn from_text(text: &str) -> Self {
        Self {
            text: collapse_whitespace(text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for AdqlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Replaces every run of whitespace with a single space and trims the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
