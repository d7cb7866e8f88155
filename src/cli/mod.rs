//! CLI command handlers
//!
//! Bridges clap argument parsing with the query pipeline, the budget sheet
//! and the display and export layers. Handlers write to the given writer so
//! `main` can pass stdout and tests can pass a buffer.

pub mod budget;
pub mod contractor;
pub mod provider;
pub mod quote;
pub mod rut;

pub use budget::{handle_budgets_command, BudgetArgs};
pub use contractor::{handle_contractors_command, ContractorArgs};
pub use provider::{handle_providers_command, ProviderArgs};
pub use quote::{handle_quote_command, QuoteArgs};
pub use rut::{handle_rut_command, RutArgs};

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::display::format_options;
use crate::error::{QuotebookError, QuotebookResult};
use crate::export::{export_csv, export_json, export_list_yaml, CsvRecord, ListExport};
use crate::query::{Bounds, Choice, SortDirection, SortSpec};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text tables
    #[default]
    Table,
    /// CSV rows (records only)
    Csv,
    /// JSON with records and stats
    Json,
    /// YAML with records and stats
    Yaml,
}

/// Options shared by every list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListOptions {
    /// Case-insensitive text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Field to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Earliest creation date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest creation date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ListOptions {
    pub fn search_term(&self) -> String {
        self.search.clone().unwrap_or_default()
    }

    pub fn created(&self) -> Bounds<NaiveDate> {
        Bounds::new(self.from, self.to)
    }

    /// Sort spec from `--sort`/`--desc`, falling back to the field's default
    pub fn sort_spec<F>(&self) -> QuotebookResult<SortSpec<F>>
    where
        F: FromStr<Err = String> + Default,
    {
        let field = match &self.sort {
            Some(raw) => raw.parse::<F>().map_err(QuotebookError::InvalidFilter)?,
            None => F::default(),
        };
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Ok(SortSpec { field, direction })
    }
}

/// Parse an optional equality filter argument; absent means "all"
pub fn parse_choice<T>(raw: Option<&str>) -> QuotebookResult<Choice<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        Some(value) => value.parse().map_err(QuotebookError::InvalidFilter),
        None => Ok(Choice::All),
    }
}

/// A list query result ready to print
pub struct ListView<'a, T, S> {
    pub name: &'static str,
    pub items: &'a [&'a T],
    pub stats: &'a S,
    pub has_active_filters: bool,
}

/// Write a list result in the requested format
///
/// `table` renders the stats cards, the table body and the dropdown values
/// through the given closures.
pub fn write_list<W, T, S>(
    out: &mut W,
    view: ListView<'_, T, S>,
    format: OutputFormat,
    table: impl FnOnce(&ListView<'_, T, S>) -> String,
) -> QuotebookResult<()>
where
    W: Write,
    T: Serialize + CsvRecord,
    S: Serialize,
{
    match format {
        OutputFormat::Table => {
            let rendered = table(&view);
            write!(out, "{}", rendered).map_err(|e| QuotebookError::Io(e.to_string()))?;
            if view.has_active_filters {
                writeln!(out, "(filters active)").map_err(|e| QuotebookError::Io(e.to_string()))?;
            }
            Ok(())
        }
        OutputFormat::Csv => export_csv(view.items, out),
        OutputFormat::Json => {
            let export = ListExport::new(view.name, view.items, view.stats, view.has_active_filters);
            export_json(&export, out, true)
        }
        OutputFormat::Yaml => {
            let export = ListExport::new(view.name, view.items, view.stats, view.has_active_filters);
            export_list_yaml(&export, out)
        }
    }
}

/// Join the three table sections with blank lines
pub fn table_sections(stats: String, list: String, options: &[(&str, Vec<String>)]) -> String {
    let mut output = stats;
    output.push('\n');
    output.push_str(&list);
    if !options.is_empty() {
        output.push('\n');
        for (label, values) in options {
            output.push_str(&format_options(label, values));
        }
    }
    output
}
