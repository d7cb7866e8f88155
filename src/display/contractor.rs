//! Contractor list display

use super::format::{format_date, truncate};
use super::table::{Align, Table};
use super::{page_footer, visible_rows};
use crate::config::Settings;
use crate::models::{Contractor, ContractorStatus, PersonType};
use crate::query::ContractorStats;

/// Format the visible contractors as a table
pub fn format_contractor_list(contractors: &[&Contractor], settings: &Settings) -> String {
    if contractors.is_empty() {
        return "No contractors found.".to_string();
    }

    let mut table = Table::new(&[
        ("Code", Align::Left),
        ("Name", Align::Left),
        ("RUT", Align::Left),
        ("Type", Align::Left),
        ("Status", Align::Left),
        ("Specialty", Align::Left),
        ("Created", Align::Left),
    ]);

    for contractor in visible_rows(contractors, settings) {
        table.push(vec![
            contractor.code.clone(),
            truncate(&contractor.name, 32),
            contractor.rut.clone(),
            contractor.person_type.to_string(),
            contractor.status.to_string(),
            contractor.specialty.clone(),
            format_date(&contractor.created_at, &settings.date_format),
        ]);
    }

    let mut output = table.render();
    output.push_str(&page_footer(contractors.len(), settings));
    output
}

/// Format the stat cards shown above the contractor list
pub fn format_contractor_stats(stats: &ContractorStats) -> String {
    let mut output = format!("Total: {}\n", stats.total);
    for status in ContractorStatus::ALL {
        output.push_str(&format!("  {:<12} {}\n", status.to_string(), stats.by_status.get(&status)));
    }
    for person_type in PersonType::ALL {
        output.push_str(&format!("  {:<12} {}\n", person_type.to_string(), stats.by_type.get(&person_type)));
    }
    output
}
