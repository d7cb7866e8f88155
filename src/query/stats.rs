//! Statistics helpers
//!
//! Per-category counters used by the entity stats records, plus the
//! distinct-value extraction that feeds filter dropdowns.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use super::collation::collate;

/// Count of records per category value
///
/// Missing categories read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts<K: Ord>(BTreeMap<K, usize>);

impl<K: Ord> Default for CategoryCounts<K> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<K: Ord> CategoryCounts<K> {
    pub fn increment(&mut self, key: K) {
        *self.0.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: &K) -> usize {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Sum over all categories
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Distinct non-empty strings, sorted with Spanish collation
pub fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut distinct: Vec<String> = values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect();
    distinct.sort_by(|a, b| collate(a, b));
    distinct
}

/// Items de-duplicated by key, keeping the first occurrence of each key,
/// then sorted by display name
pub fn distinct_by_key<'a, T, K, FK, FN>(items: &'a [T], key: FK, name: FN) -> Vec<&'a T>
where
    K: Eq + Hash,
    FK: Fn(&T) -> K,
    FN: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let mut distinct: Vec<&T> = items.iter().filter(|item| seen.insert(key(*item))).collect();
    distinct.sort_by(|a, b| collate(name(*a), name(*b)));
    distinct
}
