//! Budget sheet pricing command

use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{format_line_items, format_totals};
use crate::error::{QuotebookError, QuotebookResult};
use crate::export::{export_csv, export_json};
use crate::models::LineItem;
use crate::pricing::BudgetTotals;
use crate::services::BudgetSheet;
use crate::storage::load_line_items;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QuoteFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Quote arguments
#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// JSON file with the budget rows, in display order
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = QuoteFormat::Table)]
    pub format: QuoteFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteReport<'a> {
    items: &'a [LineItem],
    totals: BudgetTotals,
    header_summary: BudgetTotals,
}

/// Price every row of a budget file and print both totals views
pub fn handle_quote_command<W: Write>(settings: &Settings, args: QuoteArgs, out: &mut W) -> QuotebookResult<()> {
    let sheet = BudgetSheet::from_items(
        load_line_items(&args.file, settings.default_tax_percent)?,
        settings,
    );

    match args.format {
        QuoteFormat::Table => {
            let mut output = format_line_items(sheet.items(), settings);
            output.push('\n');
            output.push_str(&format_totals("Detail totals", &sheet.totals(), settings));
            output.push('\n');
            output.push_str(&format_totals("Header summary", &sheet.header_summary(), settings));
            write!(out, "{}", output).map_err(|e| QuotebookError::Io(e.to_string()))
        }
        QuoteFormat::Csv => {
            let rows: Vec<&LineItem> = sheet.items().iter().collect();
            export_csv(&rows, out)
        }
        QuoteFormat::Json => {
            let report = QuoteReport {
                items: sheet.items(),
                totals: sheet.totals(),
                header_summary: sheet.header_summary(),
            };
            export_json(&report, out, true)
        }
    }
}
