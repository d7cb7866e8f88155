//! CSV export of list results and budget rows

use std::io::Write;

use crate::error::{QuotebookError, QuotebookResult};
use crate::models::{Contractor, HistoricalBudget, LineItem, Provider};

/// A record that can be written as one CSV row
pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for Contractor {
    fn headers() -> &'static [&'static str] {
        &["Code", "Name", "RUT", "Type", "Status", "Specialty", "Email", "Phone", "City", "Created"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.rut.clone(),
            self.person_type.to_string(),
            self.status.to_string(),
            self.specialty.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.city.clone(),
            self.created_at.to_rfc3339(),
        ]
    }
}

impl CsvRecord for Provider {
    fn headers() -> &'static [&'static str] {
        &["Code", "Name", "RUT", "Category", "Status", "Email", "City", "Products", "Created"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.rut.clone(),
            self.category.clone(),
            self.status.to_string(),
            self.contact_email.clone(),
            self.city.clone(),
            self.product_count().to_string(),
            self.created_at.to_rfc3339(),
        ]
    }
}

impl CsvRecord for HistoricalBudget {
    fn headers() -> &'static [&'static str] {
        &["Folio", "Title", "Client", "Status", "Net", "Tax", "Total", "Items", "Created"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.folio.clone(),
            self.title.clone(),
            self.client.name.clone(),
            self.status.to_string(),
            self.net_amount.to_string(),
            self.tax_amount.to_string(),
            self.total_amount.to_string(),
            self.item_count.to_string(),
            self.created_at.to_rfc3339(),
        ]
    }
}

impl CsvRecord for LineItem {
    fn headers() -> &'static [&'static str] {
        &[
            "Kind",
            "Description",
            "Unit",
            "Quantity",
            "Unit Value",
            "Net",
            "Utility %",
            "With Utility",
            "Tax %",
            "Tax",
            "Gross",
            "Total",
        ]
    }

    fn fields(&self) -> Vec<String> {
        let pricing = self.pricing();
        vec![
            self.kind.to_string(),
            self.description.clone(),
            self.unit.clone(),
            self.quantity().to_string(),
            self.unit_value().to_string(),
            pricing.net_value.to_string(),
            self.utility_percent().to_string(),
            pricing.utility_loaded.to_string(),
            self.tax_percent().to_string(),
            pricing.tax_on_utility.to_string(),
            pricing.gross_value.to_string(),
            pricing.total.to_string(),
        ]
    }
}

/// Write records as CSV with a header row
pub fn export_csv<W, T>(records: &[&T], writer: W) -> QuotebookResult<()>
where
    W: Write,
    T: CsvRecord,
{
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(T::headers())
        .map_err(|e| QuotebookError::Export(e.to_string()))?;

    for record in records {
        csv_writer
            .write_record(record.fields())
            .map_err(|e| QuotebookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| QuotebookError::Export(e.to_string()))?;

    Ok(())
}
