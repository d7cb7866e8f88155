//! Budget history display

use super::format::{format_amount, format_date, truncate};
use super::table::{Align, Table};
use super::{page_footer, visible_rows};
use crate::config::Settings;
use crate::models::{BudgetStatus, HistoricalBudget};
use crate::query::BudgetStats;

/// Format the visible budgets as a table
pub fn format_budget_list(budgets: &[&HistoricalBudget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }

    let decimals = settings.amount_decimals;
    let mut table = Table::new(&[
        ("Folio", Align::Left),
        ("Title", Align::Left),
        ("Client", Align::Left),
        ("Status", Align::Left),
        ("Items", Align::Right),
        ("Total", Align::Right),
        ("Created", Align::Left),
    ]);

    for budget in visible_rows(budgets, settings) {
        table.push(vec![
            budget.folio.clone(),
            truncate(&budget.title, 32),
            truncate(&budget.client.name, 28),
            budget.status.to_string(),
            budget.item_count.to_string(),
            format_amount(budget.total_amount, decimals),
            format_date(&budget.created_at, &settings.date_format),
        ]);
    }

    let mut output = table.render();
    output.push_str(&page_footer(budgets.len(), settings));
    output
}

pub fn format_budget_stats(stats: &BudgetStats, settings: &Settings) -> String {
    let decimals = settings.amount_decimals;
    let mut output = format!(
        "Total: {}  Amount: {}  Tax: {}  Items: {}\n",
        stats.total,
        format_amount(stats.total_amount, decimals),
        format_amount(stats.total_tax, decimals),
        stats.total_items
    );
    for status in BudgetStatus::ALL {
        output.push_str(&format!("  {:<12} {}\n", status.to_string(), stats.by_status.get(&status)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientId, ClientRef};
    use crate::query::{BudgetFilter, BudgetQuery, QueryProfile, SortSpec};

    #[test]
    fn test_format_budget_list() {
        let client = ClientRef {
            id: ClientId::new(),
            name: "Agrícola Los Ríos".into(),
        };
        let mut budget = HistoricalBudget::new("PRE-2024-001", "Ampliación bodega", client);
        budget.total_amount = 1_190_000.0;
        budget.tax_amount = 190_000.0;
        let budgets = vec![budget];
        let outcome = BudgetQuery::query(&budgets, &BudgetFilter::default(), SortSpec::default());

        let settings = Settings::default();
        let output = format_budget_list(&outcome.items, &settings);
        assert!(output.contains("PRE-2024-001"));
        assert!(output.contains("1190000"));
        assert!(output.contains("borrador"));

        let stats = format_budget_stats(&outcome.stats, &settings);
        assert!(stats.starts_with("Total: 1  Amount: 1190000  Tax: 190000"));
    }
}
