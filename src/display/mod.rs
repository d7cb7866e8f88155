//! Display formatting for terminal output
//!
//! Lists, stat cards and budget sheets rendered as plain text tables.

pub mod budget;
pub mod contractor;
pub mod format;
pub mod provider;
pub mod quote;
pub mod table;

pub use budget::{format_budget_list, format_budget_stats};
pub use contractor::{format_contractor_list, format_contractor_stats};
pub use format::{format_amount, format_date, format_percentage};
pub use provider::{format_provider_list, format_provider_stats};
pub use quote::{format_line_items, format_totals};
pub use table::{Align, Table};

use crate::config::Settings;

/// The rows that fit on one page
fn visible_rows<'a, T>(rows: &'a [&'a T], settings: &Settings) -> impl Iterator<Item = &'a T> {
    rows.iter().take(settings.page_size.max(1)).copied()
}

/// "... N more" note when a list is longer than a page
fn page_footer(total: usize, settings: &Settings) -> String {
    let page = settings.page_size.max(1);
    if total > page {
        format!("... {} more (showing {} of {})\n", total - page, page, total)
    } else {
        String::new()
    }
}

/// Print distinct filter values under a label
pub fn format_options<S: AsRef<str>>(label: &str, values: &[S]) -> String {
    if values.is_empty() {
        return format!("{}: -\n", label);
    }
    let joined: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
    format!("{}: {}\n", label, joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_footer() {
        let settings = Settings {
            page_size: 2,
            ..Settings::default()
        };
        assert_eq!(page_footer(2, &settings), "");
        assert_eq!(page_footer(5, &settings), "... 3 more (showing 2 of 5)\n");
    }

    #[test]
    fn test_format_options() {
        assert_eq!(format_options("Specialties", &["Pintura", "Aislación"]), "Specialties: Pintura, Aislación\n");
        assert_eq!(format_options::<&str>("Specialties", &[]), "Specialties: -\n");
    }
}
