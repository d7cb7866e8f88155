//! Budget sheet display: per-row pricing and both totals views

use super::format::{format_amount, format_percentage, separator};
use super::table::{Align, Table};
use crate::config::Settings;
use crate::models::{LineItem, LineKind};
use crate::pricing::BudgetTotals;

/// Format the rows of a budget sheet with their derived values
pub fn format_line_items(items: &[LineItem], settings: &Settings) -> String {
    if items.is_empty() {
        return "No budget rows.".to_string();
    }

    let decimals = settings.amount_decimals;
    let mut table = Table::new(&[
        ("Description", Align::Left),
        ("Unit", Align::Left),
        ("Qty", Align::Right),
        ("Unit value", Align::Right),
        ("Net", Align::Right),
        ("Util.", Align::Right),
        ("With util.", Align::Right),
        ("Tax", Align::Right),
        ("Total", Align::Right),
    ]);

    for line in items {
        match line.kind {
            LineKind::Item => {
                let pricing = line.pricing();
                table.push(vec![
                    line.description.clone(),
                    line.unit.clone(),
                    line.quantity().to_string(),
                    format_amount(line.unit_value(), decimals),
                    format_amount(pricing.net_value, decimals),
                    format_percentage(line.utility_percent()),
                    format_amount(pricing.utility_loaded, decimals),
                    format_amount(pricing.tax_on_utility, decimals),
                    format_amount(pricing.total, decimals),
                ]);
            }
            LineKind::Section => table.push(vec![line.description.to_uppercase()]),
            LineKind::Comment => table.push(vec![format!("  {}", line.description)]),
        }
    }

    table.render()
}

/// Format a totals block under a title
pub fn format_totals(title: &str, totals: &BudgetTotals, settings: &Settings) -> String {
    let decimals = settings.amount_decimals;
    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&format!("{}\n", separator(title.chars().count().max(24))));
    output.push_str(&format!("  Items:        {}\n", totals.item_count));
    output.push_str(&format!(
        "  Avg. utility: {}\n",
        format_percentage(totals.average_utility_percent)
    ));
    output.push_str(&format!("  Net:          {}\n", format_amount(totals.net_total, decimals)));
    output.push_str(&format!("  Tax:          {}\n", format_amount(totals.tax_total, decimals)));
    output.push_str(&format!("  Total:        {}\n", format_amount(totals.grand_total, decimals)));
    output
}
