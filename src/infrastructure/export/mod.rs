//! File output for catalog exports.

mod catalog_files;

pub use catalog_files::{CATALOG_CSV_FILE, ExportError, METADATA_FILE, write_catalog_csv, write_metadata};
