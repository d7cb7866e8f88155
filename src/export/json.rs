//! JSON export of list results
//!
//! A list export carries the visible records together with the stats
//! computed over them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{QuotebookError, QuotebookResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A filtered, sorted list and its stats
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListExport<'a, T, S> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    /// Which list was exported ("contractors", "providers", "budgets")
    pub list: &'static str,
    pub count: usize,
    pub has_active_filters: bool,
    pub stats: &'a S,
    pub items: &'a [&'a T],
}

impl<'a, T, S> ListExport<'a, T, S> {
    pub fn new(list: &'static str, items: &'a [&'a T], stats: &'a S, has_active_filters: bool) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            list,
            count: items.len(),
            has_active_filters,
            stats,
            items,
        }
    }
}

/// Write any serializable value as JSON
pub fn export_json<W, V>(value: &V, writer: &mut W, pretty: bool) -> QuotebookResult<()>
where
    W: Write,
    V: Serialize + ?Sized,
{
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    };
    written.map_err(|e| QuotebookError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| QuotebookError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Provider, ProviderStatus};
    use crate::query::{ProviderFilter, ProviderQuery, QueryProfile, SortSpec};

    #[test]
    fn test_list_export() {
        let mut inactive = Provider::new("PRV-002", "Maderas Biobío", "77.000.000-0", "Materiales");
        inactive.status = ProviderStatus::Inactive;
        let providers = vec![
            Provider::new("PRV-001", "Ferretería Sur", "77.123.456-1", "Materiales"),
            inactive,
        ];
        let filter = ProviderFilter {
            category: "Materiales".parse().unwrap(),
            ..ProviderFilter::default()
        };
        let outcome = ProviderQuery::query(&providers, &filter, SortSpec::default());
        let export = ListExport::new("providers", &outcome.items, &outcome.stats, outcome.has_active_filters);

        let mut buffer = Vec::new();
        export_json(&export, &mut buffer, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["schemaVersion"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["list"], "providers");
        assert_eq!(value["count"], 2);
        assert_eq!(value["hasActiveFilters"], true);
        assert_eq!(value["stats"]["byStatus"]["Inactivo"], 1);
        assert_eq!(value["stats"]["byCategory"]["Materiales"], 2);
        assert_eq!(value["items"][0]["code"], "PRV-001");
    }
}
