//! Historical budget list query

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::collation::collate;
use super::filter::{Bounds, Choice};
use super::pipeline::QueryProfile;
use super::stats::{distinct_by_key, CategoryCounts};
use crate::models::{BudgetStatus, ClientId, ClientRef, HistoricalBudget};

/// Filters of the budget history
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetFilter {
    pub search: String,
    pub status: Choice<BudgetStatus>,
    pub client: Choice<ClientId>,
    /// Budget total, inclusive
    pub total_amount: Bounds<f64>,
    pub created: Bounds<NaiveDate>,
}

impl BudgetFilter {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BudgetSortField {
    Folio,
    Title,
    Client,
    TotalAmount,
    #[default]
    CreatedAt,
}

impl fmt::Display for BudgetSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folio => write!(f, "folio"),
            Self::Title => write!(f, "title"),
            Self::Client => write!(f, "client"),
            Self::TotalAmount => write!(f, "total"),
            Self::CreatedAt => write!(f, "created"),
        }
    }
}

impl FromStr for BudgetSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "folio" => Ok(Self::Folio),
            "title" | "titulo" => Ok(Self::Title),
            "client" | "cliente" => Ok(Self::Client),
            "total" | "total_amount" | "monto" => Ok(Self::TotalAmount),
            "created" | "created_at" | "fecha" => Ok(Self::CreatedAt),
            other => Err(format!("unknown budget sort field '{}'", other)),
        }
    }
}

/// Counts and sums over the filtered budgets
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStats {
    pub total: usize,
    pub by_status: CategoryCounts<BudgetStatus>,
    pub total_amount: f64,
    pub total_tax: f64,
    pub total_items: usize,
}

/// Query profile for the budget history
pub struct BudgetQuery;

impl QueryProfile for BudgetQuery {
    type Entity = HistoricalBudget;
    type Filter = BudgetFilter;
    type SortField = BudgetSortField;
    type Stats = BudgetStats;

    fn search_term(filter: &BudgetFilter) -> &str {
        &filter.search
    }

    fn search_fields(entity: &HistoricalBudget) -> Vec<&str> {
        vec![
            entity.folio.as_str(),
            entity.title.as_str(),
            entity.client.name.as_str(),
        ]
    }

    fn matches_filter(entity: &HistoricalBudget, filter: &BudgetFilter) -> bool {
        filter.status.admits(&entity.status)
            && filter.client.admits(&entity.client.id)
            && filter.total_amount.contains(&entity.total_amount)
            && filter.created.contains(&entity.created_at.date_naive())
    }

    fn compare(field: BudgetSortField, a: &HistoricalBudget, b: &HistoricalBudget) -> Ordering {
        match field {
            BudgetSortField::Folio => collate(&a.folio, &b.folio),
            BudgetSortField::Title => collate(&a.title, &b.title),
            BudgetSortField::Client => collate(&a.client.name, &b.client.name),
            BudgetSortField::TotalAmount => a.total_amount.total_cmp(&b.total_amount),
            BudgetSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }

    fn tally(stats: &mut BudgetStats, entity: &HistoricalBudget) {
        stats.total += 1;
        stats.by_status.increment(entity.status);
        stats.total_amount += entity.total_amount;
        stats.total_tax += entity.tax_amount;
        stats.total_items += entity.item_count;
    }
}

/// Clients for the filter dropdown: one entry per client id (first seen
/// wins), sorted by name
pub fn client_options(budgets: &[HistoricalBudget]) -> Vec<&ClientRef> {
    let distinct = distinct_by_key(budgets, |b| b.client.id, |b| b.client.name.as_str());
    distinct.into_iter().map(|b| &b.client).collect()
}
