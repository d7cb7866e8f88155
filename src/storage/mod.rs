//! Storage layer for Quotebook
//!
//! Read-only access to the entity files under the data directory. Each file
//! is a JSON array kept in display order; a missing file is an empty list.

pub mod file_io;

pub use file_io::{read_json, read_json_required};

use std::path::Path;
use tracing::debug;

use crate::config::paths::QuotebookPaths;
use crate::error::QuotebookError;
use crate::models::{Contractor, HistoricalBudget, LineItem, LineItemRecord, Provider};

/// Loads the listed entities from the data directory
pub struct DataSource {
    paths: QuotebookPaths,
}

impl DataSource {
    pub fn new(paths: QuotebookPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &QuotebookPaths {
        &self.paths
    }

    pub fn contractors(&self) -> Result<Vec<Contractor>, QuotebookError> {
        let contractors: Vec<Contractor> = read_json(self.paths.contractors_file())?;
        debug!(count = contractors.len(), "loaded contractors");
        Ok(contractors)
    }

    pub fn providers(&self) -> Result<Vec<Provider>, QuotebookError> {
        let providers: Vec<Provider> = read_json(self.paths.providers_file())?;
        debug!(count = providers.len(), "loaded providers");
        Ok(providers)
    }

    pub fn budgets(&self) -> Result<Vec<HistoricalBudget>, QuotebookError> {
        let budgets: Vec<HistoricalBudget> = read_json(self.paths.budgets_file())?;
        debug!(count = budgets.len(), "loaded budget history");
        Ok(budgets)
    }
}

/// Load the rows of a budget sheet file; the file must exist
///
/// Rows without a `taxPercent` take `default_tax_percent`.
pub fn load_line_items<P: AsRef<Path>>(
    path: P,
    default_tax_percent: f64,
) -> Result<Vec<LineItem>, QuotebookError> {
    let records: Vec<LineItemRecord> = read_json_required(path.as_ref())?;
    let items: Vec<LineItem> = records
        .into_iter()
        .map(|record| record.into_line_item(default_tax_percent))
        .collect();
    debug!(count = items.len(), path = %path.as_ref().display(), "loaded budget rows");
    Ok(items)
}
