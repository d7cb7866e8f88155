//! Generic list query pipeline
//!
//! Every list screen runs the same three steps over its entities: filter,
//! sort, then derive stats from what is left. The entity-specific parts
//! (which fields are searched, which predicates apply, how each sort field
//! compares, what the stats record counts) live in a [`QueryProfile`].
//!
//! The pipeline is pure: each call takes the full collection and returns a
//! fresh result, so it can be re-run on every keystroke.

use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

use super::filter::matches_search;
use super::sort::SortSpec;

/// Entity-specific configuration of the query pipeline
pub trait QueryProfile {
    /// Record type being listed
    type Entity;

    /// Filter struct; its `Default` value is the neutral filter
    type Filter: Default + PartialEq;

    /// Sortable fields
    type SortField: Copy;

    /// Stats record derived from the filtered records
    type Stats: Default;

    /// Current free-text search term
    fn search_term(filter: &Self::Filter) -> &str;

    /// Fields searched by the free-text term, in order
    fn search_fields(entity: &Self::Entity) -> Vec<&str>;

    /// Equality and range predicates (everything except free text)
    fn matches_filter(entity: &Self::Entity, filter: &Self::Filter) -> bool;

    /// Ascending comparison on one field
    fn compare(field: Self::SortField, a: &Self::Entity, b: &Self::Entity) -> Ordering;

    /// Add one filtered record to the stats
    fn tally(stats: &mut Self::Stats, entity: &Self::Entity);

    /// Run the full pipeline with this profile
    fn query<'a>(
        entities: &'a [Self::Entity],
        filter: &Self::Filter,
        sort: SortSpec<Self::SortField>,
    ) -> QueryOutcome<'a, Self>
    where
        Self: Sized,
    {
        query_entities::<Self>(entities, filter, sort)
    }
}

/// Result of a query: the visible records, their stats and whether any
/// filter is active
pub struct QueryOutcome<'a, P: QueryProfile> {
    pub items: Vec<&'a P::Entity>,
    pub stats: P::Stats,
    pub has_active_filters: bool,
}

impl<'a, P> fmt::Debug for QueryOutcome<'a, P>
where
    P: QueryProfile,
    P::Entity: fmt::Debug,
    P::Stats: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOutcome")
            .field("items", &self.items)
            .field("stats", &self.stats)
            .field("has_active_filters", &self.has_active_filters)
            .finish()
    }
}

/// Keep the records that pass every active predicate, in input order
pub fn filter_entities<'a, P: QueryProfile>(
    entities: &'a [P::Entity],
    filter: &P::Filter,
) -> Vec<&'a P::Entity> {
    let term = P::search_term(filter);
    entities
        .iter()
        .filter(|entity| matches_search(term, &P::search_fields(entity)))
        .filter(|entity| P::matches_filter(entity, filter))
        .collect()
}

/// Stable sort; records with equal keys keep their relative order in
/// both directions
pub fn sort_entities<P: QueryProfile>(items: &mut [&P::Entity], sort: SortSpec<P::SortField>) {
    items.sort_by(|a, b| sort.direction.apply(P::compare(sort.field, a, b)));
}

/// Stats over the given (filtered) records, built from scratch
pub fn derive_stats<P: QueryProfile>(items: &[&P::Entity]) -> P::Stats {
    let mut stats = P::Stats::default();
    for entity in items {
        P::tally(&mut stats, entity);
    }
    stats
}

/// Whether the filter differs from the neutral filter
pub fn has_active_filters<P: QueryProfile>(filter: &P::Filter) -> bool {
    *filter != P::Filter::default()
}

/// Filter, sort and derive stats in one pass
pub fn query_entities<'a, P: QueryProfile>(
    entities: &'a [P::Entity],
    filter: &P::Filter,
    sort: SortSpec<P::SortField>,
) -> QueryOutcome<'a, P> {
    let mut items = filter_entities::<P>(entities, filter);
    sort_entities::<P>(&mut items, sort);
    let stats = derive_stats::<P>(&items);
    let has_active_filters = has_active_filters::<P>(filter);

    debug!(
        total = entities.len(),
        matched = items.len(),
        has_active_filters,
        "ran list query"
    );

    QueryOutcome {
        items,
        stats,
        has_active_filters,
    }
}
