//! Provider list display

use super::format::{format_date, truncate};
use super::table::{Align, Table};
use super::{page_footer, visible_rows};
use crate::config::Settings;
use crate::models::{Provider, ProviderStatus};
use crate::query::ProviderStats;

/// Format the visible providers as a table
pub fn format_provider_list(providers: &[&Provider], settings: &Settings) -> String {
    if providers.is_empty() {
        return "No providers found.".to_string();
    }

    let mut table = Table::new(&[
        ("Code", Align::Left),
        ("Name", Align::Left),
        ("RUT", Align::Left),
        ("Category", Align::Left),
        ("Status", Align::Left),
        ("Products", Align::Right),
        ("Created", Align::Left),
    ]);

    for provider in visible_rows(providers, settings) {
        table.push(vec![
            provider.code.clone(),
            truncate(&provider.name, 32),
            provider.rut.clone(),
            provider.category.clone(),
            provider.status.to_string(),
            provider.product_count().to_string(),
            format_date(&provider.created_at, &settings.date_format),
        ]);
    }

    let mut output = table.render();
    output.push_str(&page_footer(providers.len(), settings));
    output
}

pub fn format_provider_stats(stats: &ProviderStats) -> String {
    let mut output = format!("Total: {}  Products: {}\n", stats.total, stats.total_products);
    for status in ProviderStatus::ALL {
        output.push_str(&format!("  {:<12} {}\n", status.to_string(), stats.by_status.get(&status)));
    }
    for (category, count) in stats.by_category.iter() {
        output.push_str(&format!("  {:<12} {}\n", category, count));
    }
    output
}
