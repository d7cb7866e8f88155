//! Provider list query

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::collation::collate;
use super::filter::{Bounds, Choice};
use super::pipeline::QueryProfile;
use super::stats::{distinct_values, CategoryCounts};
use crate::models::{Provider, ProviderStatus};

/// Filters of the provider list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProviderFilter {
    pub search: String,
    pub status: Choice<ProviderStatus>,
    pub category: Choice<String>,
    /// Number of listed products, inclusive
    pub product_count: Bounds<usize>,
    pub created: Bounds<NaiveDate>,
}

impl ProviderFilter {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sortable provider fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderSortField {
    #[default]
    Name,
    Code,
    Category,
    ProductCount,
    CreatedAt,
}

impl fmt::Display for ProviderSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Code => write!(f, "code"),
            Self::Category => write!(f, "category"),
            Self::ProductCount => write!(f, "products"),
            Self::CreatedAt => write!(f, "created"),
        }
    }
}

impl FromStr for ProviderSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "nombre" => Ok(Self::Name),
            "code" | "codigo" => Ok(Self::Code),
            "category" | "categoria" => Ok(Self::Category),
            "products" | "productos" => Ok(Self::ProductCount),
            "created" | "created_at" | "fecha" => Ok(Self::CreatedAt),
            other => Err(format!("unknown provider sort field '{}'", other)),
        }
    }
}

/// Counts over the filtered providers
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStats {
    pub total: usize,
    pub by_status: CategoryCounts<ProviderStatus>,
    pub by_category: CategoryCounts<String>,
    /// Sum of listed products
    pub total_products: usize,
}

/// Query profile for providers
pub struct ProviderQuery;

impl QueryProfile for ProviderQuery {
    type Entity = Provider;
    type Filter = ProviderFilter;
    type SortField = ProviderSortField;
    type Stats = ProviderStats;

    fn search_term(filter: &ProviderFilter) -> &str {
        &filter.search
    }

    fn search_fields(entity: &Provider) -> Vec<&str> {
        vec![
            entity.code.as_str(),
            entity.name.as_str(),
            entity.rut.as_str(),
            entity.contact_email.as_str(),
        ]
    }

    fn matches_filter(entity: &Provider, filter: &ProviderFilter) -> bool {
        filter.status.admits(&entity.status)
            && filter.category.admits(&entity.category)
            && filter.product_count.contains(&entity.product_count())
            && filter.created.contains(&entity.created_at.date_naive())
    }

    fn compare(field: ProviderSortField, a: &Provider, b: &Provider) -> Ordering {
        match field {
            ProviderSortField::Name => collate(&a.name, &b.name),
            ProviderSortField::Code => collate(&a.code, &b.code),
            ProviderSortField::Category => collate(&a.category, &b.category),
            ProviderSortField::ProductCount => a.product_count().cmp(&b.product_count()),
            ProviderSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }

    fn tally(stats: &mut ProviderStats, entity: &Provider) {
        stats.total += 1;
        stats.by_status.increment(entity.status);
        stats.by_category.increment(entity.category.clone());
        stats.total_products += entity.product_count();
    }
}

/// Categories for the filter dropdown, taken from the unfiltered list
pub fn category_options(providers: &[Provider]) -> Vec<String> {
    distinct_values(providers.iter().map(|p| p.category.as_str()))
}
