//! CSV and JSON writers for the catalog export.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::{CatalogMetadata, CatalogPlanet};

pub const CATALOG_CSV_FILE: &str = "exoplanet_data.csv";
pub const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes `planets` to `<dir>/exoplanet_data.csv`, creating `dir` if needed.
///
/// Nothing is written when `planets` is empty. Returns the file path when a
/// file was written.
pub fn write_catalog_csv(
    dir: &Path,
    planets: &[CatalogPlanet],
) -> Result<Option<PathBuf>, ExportError> {
    if planets.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(CATALOG_CSV_FILE);

    let mut writer = csv::Writer::from_path(&path)?;
    for planet in planets {
        writer.serialize(planet)?;
    }
    writer.flush()?;

    Ok(Some(path))
}

/// Writes pretty-printed metadata to `<dir>/metadata.json`.
pub fn write_metadata(dir: &Path, metadata: &CatalogMetadata) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(METADATA_FILE);

    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(&path, json)?;

    Ok(path)
}
