//! Budget history command

use clap::Args;
use std::io::Write;

use super::{parse_choice, table_sections, write_list, ListOptions, ListView};
use crate::config::Settings;
use crate::display::{format_budget_list, format_budget_stats};
use crate::error::QuotebookResult;
use crate::models::{BudgetStatus, ClientId};
use crate::query::{client_options, Bounds, BudgetFilter, BudgetQuery, BudgetSortField, QueryProfile};
use crate::storage::DataSource;

/// Budget history arguments
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetArgs {
    /// Status: borrador, enviado, aprobado, rechazado or all
    #[arg(long)]
    pub status: Option<String>,

    /// Client id: the full UUID, optionally prefixed with "cli-"
    #[arg(long)]
    pub client: Option<String>,

    /// Minimum budget total, inclusive
    #[arg(long)]
    pub min_total: Option<f64>,

    /// Maximum budget total, inclusive
    #[arg(long)]
    pub max_total: Option<f64>,

    #[command(flatten)]
    pub list: ListOptions,
}

impl BudgetArgs {
    pub fn filter(&self) -> QuotebookResult<BudgetFilter> {
        Ok(BudgetFilter {
            search: self.list.search_term(),
            status: parse_choice::<BudgetStatus>(self.status.as_deref())?,
            client: parse_choice::<ClientId>(self.client.as_deref())?,
            total_amount: Bounds::new(self.min_total, self.max_total),
            created: self.list.created(),
        })
    }
}

/// List issued budgets
pub fn handle_budgets_command<W: Write>(
    source: &DataSource,
    settings: &Settings,
    args: BudgetArgs,
    out: &mut W,
) -> QuotebookResult<()> {
    let budgets = source.budgets()?;
    let filter = args.filter()?;
    let sort = args.list.sort_spec::<BudgetSortField>()?;
    let outcome = BudgetQuery::query(&budgets, &filter, sort);

    let view = ListView {
        name: "budgets",
        items: &outcome.items,
        stats: &outcome.stats,
        has_active_filters: outcome.has_active_filters,
    };
    write_list(out, view, args.list.format, |view| {
        let clients: Vec<String> = client_options(&budgets)
            .into_iter()
            .map(|client| format!("{} ({})", client.name, client.id.as_uuid()))
            .collect();
        table_sections(
            format_budget_stats(view.stats, settings),
            format_budget_list(view.items, settings),
            &[("Clients", clients)],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::QuotebookPaths;
    use crate::models::{ClientRef, HistoricalBudget};
    use std::fs;
    use tempfile::TempDir;

    fn source() -> (TempDir, DataSource, ClientRef) {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let rios = ClientRef {
            id: ClientId::new(),
            name: "Agrícola Los Ríos".into(),
        };
        let talca = ClientRef {
            id: ClientId::new(),
            name: "Municipalidad de Talca".into(),
        };
        let mut first = HistoricalBudget::new("PRE-2024-001", "Ampliación bodega", rios.clone());
        first.total_amount = 1_190_000.0;
        first.status = BudgetStatus::Approved;
        let mut second = HistoricalBudget::new("PRE-2024-002", "Cierre perimetral", talca);
        second.total_amount = 2_975_000.0;
        fs::write(
            paths.budgets_file(),
            serde_json::to_string(&vec![first, second]).unwrap(),
        )
        .unwrap();

        (temp_dir, DataSource::new(paths), rios)
    }

    #[test]
    fn test_filter_by_client_id() {
        let (_temp_dir, source, rios) = source();
        let args = BudgetArgs {
            client: Some(format!("cli-{}", rios.id.as_uuid())),
            ..BudgetArgs::default()
        };

        let mut out = Vec::new();
        handle_budgets_command(&source, &Settings::default(), args, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("PRE-2024-001"));
        assert!(!output.contains("PRE-2024-002"));
        // Client dropdown still lists every client
        assert!(output.contains("Municipalidad de Talca"));
    }

    #[test]
    fn test_malformed_client_id() {
        let (_temp_dir, source, _) = source();
        let args = BudgetArgs {
            client: Some("cli-1234".into()),
            ..BudgetArgs::default()
        };
        let mut out = Vec::new();
        let err = handle_budgets_command(&source, &Settings::default(), args, &mut out).unwrap_err();
        assert!(matches!(err, crate::error::QuotebookError::InvalidFilter(_)));
    }

    #[test]
    fn test_yaml_output_with_amount_range() {
        let (_temp_dir, source, _) = source();
        let mut args = BudgetArgs {
            min_total: Some(2_000_000.0),
            ..BudgetArgs::default()
        };
        args.list.format = OutputFormat::Yaml;

        let mut out = Vec::new();
        handle_budgets_command(&source, &Settings::default(), args, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("folio: PRE-2024-002"));
        assert!(!output.contains("PRE-2024-001"));
        assert!(output.contains("count: 1"));
    }
}
