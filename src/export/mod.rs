//! Export module for Quotebook
//!
//! Writes list results and budget rows in machine-readable formats:
//! - CSV: one row per record (spreadsheet-compatible)
//! - JSON: records plus stats
//! - YAML: records plus stats, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_csv, CsvRecord};
pub use json::{export_json, ListExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_list_yaml;
