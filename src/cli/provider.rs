//! Provider list command

use clap::Args;
use std::io::Write;

use super::{parse_choice, table_sections, write_list, ListOptions, ListView};
use crate::config::Settings;
use crate::display::{format_provider_list, format_provider_stats};
use crate::error::QuotebookResult;
use crate::models::ProviderStatus;
use crate::query::{category_options, Bounds, ProviderFilter, ProviderQuery, ProviderSortField, QueryProfile};
use crate::storage::DataSource;

/// Provider list arguments
#[derive(Args, Debug, Clone, Default)]
pub struct ProviderArgs {
    /// Status: Activo, Inactivo or all
    #[arg(long)]
    pub status: Option<String>,

    /// Exact category
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum number of listed products
    #[arg(long)]
    pub min_products: Option<usize>,

    /// Maximum number of listed products
    #[arg(long)]
    pub max_products: Option<usize>,

    #[command(flatten)]
    pub list: ListOptions,
}

impl ProviderArgs {
    pub fn filter(&self) -> QuotebookResult<ProviderFilter> {
        Ok(ProviderFilter {
            search: self.list.search_term(),
            status: parse_choice::<ProviderStatus>(self.status.as_deref())?,
            category: parse_choice::<String>(self.category.as_deref())?,
            product_count: Bounds::new(self.min_products, self.max_products),
            created: self.list.created(),
        })
    }
}

/// List providers
pub fn handle_providers_command<W: Write>(
    source: &DataSource,
    settings: &Settings,
    args: ProviderArgs,
    out: &mut W,
) -> QuotebookResult<()> {
    let providers = source.providers()?;
    let filter = args.filter()?;
    let sort = args.list.sort_spec::<ProviderSortField>()?;
    let outcome = ProviderQuery::query(&providers, &filter, sort);

    let view = ListView {
        name: "providers",
        items: &outcome.items,
        stats: &outcome.stats,
        has_active_filters: outcome.has_active_filters,
    };
    write_list(out, view, args.list.format, |view| {
        table_sections(
            format_provider_stats(view.stats),
            format_provider_list(view.items, settings),
            &[("Categories", category_options(&providers))],
        )
    })
}
