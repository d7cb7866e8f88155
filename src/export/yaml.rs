//! YAML export of list results

use serde::Serialize;
use std::io::Write;

use crate::error::{QuotebookError, QuotebookResult};
use crate::export::json::ListExport;

/// Export a list to YAML with a short header comment
pub fn export_list_yaml<W, T, S>(export: &ListExport<'_, T, S>, writer: &mut W) -> QuotebookResult<()>
where
    W: Write,
    T: Serialize,
    S: Serialize,
{
    writeln!(writer, "# Quotebook {} export", export.list)
        .map_err(|e| QuotebookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| QuotebookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| QuotebookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| QuotebookError::Export(e.to_string()))?;

    Ok(())
}
