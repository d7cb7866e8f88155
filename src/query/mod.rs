//! List queries
//!
//! The filter, sort and stats pipeline shared by the contractor, provider
//! and budget history lists, plus one query profile per entity.

pub mod budget;
pub mod collation;
pub mod contractor;
pub mod filter;
pub mod pipeline;
pub mod provider;
pub mod sort;
pub mod stats;

pub use budget::{client_options, BudgetFilter, BudgetQuery, BudgetSortField, BudgetStats};
pub use collation::collate;
pub use contractor::{
    specialty_options, ContractorFilter, ContractorQuery, ContractorSortField, ContractorStats,
};
pub use filter::{matches_search, Bounds, Choice};
pub use pipeline::{
    derive_stats, filter_entities, has_active_filters, query_entities, sort_entities,
    QueryOutcome, QueryProfile,
};
pub use provider::{category_options, ProviderFilter, ProviderQuery, ProviderSortField, ProviderStats};
pub use sort::{SortDirection, SortSpec};
pub use stats::{distinct_by_key, distinct_values, CategoryCounts};
