//! Budget-level totals
//!
//! Reduces a list of budget lines into the figures shown under the line
//! table (detail totals) and in the budget header (header summary). The two
//! views compute tax differently and are kept as separate operations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::LineItem;

/// Flat tax rate used by the budget header, regardless of each line's own rate
pub const HEADER_TAX_RATE: f64 = 0.19;

/// Aggregated totals of a budget
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    /// Sum of utility-loaded values
    pub net_total: f64,
    pub tax_total: f64,
    pub grand_total: f64,
    /// Number of priced lines
    pub item_count: usize,
    /// Mean utility over lines that carry a utility margin
    pub average_utility_percent: f64,
}

/// Totals for the line detail view: tax is the sum of each line's own tax
pub fn compute_budget_totals(items: &[LineItem]) -> BudgetTotals {
    let mut totals = base_totals(items);
    totals.tax_total = monetary(items).map(|l| l.pricing().tax_on_utility).sum();
    totals.grand_total = totals.net_total + totals.tax_total;

    debug!(
        items = totals.item_count,
        grand_total = totals.grand_total,
        "computed budget detail totals"
    );
    totals
}

/// Totals for the budget header: tax is a flat [`HEADER_TAX_RATE`] of the net total
pub fn compute_header_summary(items: &[LineItem]) -> BudgetTotals {
    let mut totals = base_totals(items);
    totals.tax_total = totals.net_total * HEADER_TAX_RATE;
    totals.grand_total = totals.net_total + totals.tax_total;

    debug!(
        items = totals.item_count,
        grand_total = totals.grand_total,
        "computed budget header summary"
    );
    totals
}

fn monetary(items: &[LineItem]) -> impl Iterator<Item = &LineItem> {
    items.iter().filter(|line| line.is_monetary())
}

fn base_totals(items: &[LineItem]) -> BudgetTotals {
    let mut net_total = 0.0;
    let mut item_count = 0;
    let mut utility_sum = 0.0;
    let mut utility_count = 0usize;

    for line in monetary(items) {
        net_total += line.pricing().utility_loaded;
        item_count += 1;
        if line.utility_percent() > 0.0 {
            utility_sum += line.utility_percent();
            utility_count += 1;
        }
    }

    let average_utility_percent = if utility_count == 0 {
        0.0
    } else {
        utility_sum / utility_count as f64
    };

    BudgetTotals {
        net_total,
        tax_total: 0.0,
        grand_total: 0.0,
        item_count,
        average_utility_percent,
    }
}
