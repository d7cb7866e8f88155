//! Budget sheet service
//!
//! Keeps the ordered rows of a budget being edited and answers the totals
//! shown under the detail table and in the header.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{QuotebookError, QuotebookResult};
use crate::models::{LineItem, LineItemError, LineItemId};
use crate::pricing::{compute_budget_totals, compute_header_summary, BudgetTotals};

/// A partial edit of one row; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemEdit {
    pub description: Option<String>,
    pub unit: Option<String>,
    pub unit_value: Option<f64>,
    pub quantity: Option<f64>,
    pub utility_percent: Option<f64>,
    pub tax_percent: Option<f64>,
}

impl LineItemEdit {
    /// Whether the edit touches any pricing input
    pub fn touches_pricing(&self) -> bool {
        self.unit_value.is_some()
            || self.quantity.is_some()
            || self.utility_percent.is_some()
            || self.tax_percent.is_some()
    }
}

/// Rows of a budget under edit
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSheet {
    items: Vec<LineItem>,
    default_tax_percent: f64,
}

impl BudgetSheet {
    /// Create an empty sheet; new rows take their tax from the settings
    pub fn new(settings: &Settings) -> Self {
        Self::with_tax_percent(settings.default_tax_percent)
    }

    pub fn with_tax_percent(default_tax_percent: f64) -> Self {
        Self {
            items: Vec::new(),
            default_tax_percent,
        }
    }

    /// Wrap rows loaded from a file, keeping their order
    pub fn from_items(items: Vec<LineItem>, settings: &Settings) -> Self {
        Self {
            items,
            default_tax_percent: settings.default_tax_percent,
        }
    }

    /// Append an empty priced row
    pub fn add_item(&mut self, description: &str) -> LineItemId {
        self.push(LineItem::item(description.trim(), self.default_tax_percent))
    }

    pub fn add_comment(&mut self, text: &str) -> LineItemId {
        self.push(LineItem::comment(text))
    }

    pub fn add_section(&mut self, title: &str) -> LineItemId {
        self.push(LineItem::section(title.trim()))
    }

    fn push(&mut self, line: LineItem) -> LineItemId {
        let id = line.id;
        debug!(id = %id, kind = %line.kind, "added budget row");
        self.items.push(line);
        id
    }

    /// Apply an edit to one row and recompute its pricing
    ///
    /// Pricing edits on a comment or section row are rejected without
    /// changing the row.
    pub fn update(&mut self, id: LineItemId, edit: LineItemEdit) -> QuotebookResult<&LineItem> {
        let line = self
            .items
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or_else(|| QuotebookError::line_item_not_found(id.to_string()))?;

        if edit.touches_pricing() && !line.is_monetary() {
            warn!(id = %id, kind = %line.kind, "pricing edit on a non-monetary row");
            return Err(QuotebookError::Validation(format!(
                "A {} row has no pricing fields",
                line.kind
            )));
        }

        if let Some(description) = edit.description {
            line.description = description;
        }
        if let Some(unit) = edit.unit {
            line.unit = unit;
        }
        let pricing_error = |e: LineItemError| QuotebookError::Validation(e.to_string());
        if let Some(value) = edit.unit_value {
            line.set_unit_value(value).map_err(pricing_error)?;
        }
        if let Some(value) = edit.quantity {
            line.set_quantity(value).map_err(pricing_error)?;
        }
        if let Some(value) = edit.utility_percent {
            line.set_utility_percent(value).map_err(pricing_error)?;
        }
        if let Some(value) = edit.tax_percent {
            line.set_tax_percent(value).map_err(pricing_error)?;
        }

        Ok(line)
    }

    /// Remove a row, returning it
    pub fn remove(&mut self, id: LineItemId) -> QuotebookResult<LineItem> {
        let index = self
            .items
            .iter()
            .position(|line| line.id == id)
            .ok_or_else(|| QuotebookError::line_item_not_found(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    pub fn get(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Rows in display order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals shown under the detail table
    pub fn totals(&self) -> BudgetTotals {
        compute_budget_totals(&self.items)
    }

    /// Totals shown in the budget header (flat IVA over the net)
    pub fn header_summary(&self) -> BudgetTotals {
        compute_header_summary(&self.items)
    }
}
