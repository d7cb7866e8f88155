//! Contractor list query
//!
//! Search covers code, name, RUT and email. Filters: status, person type,
//! specialty and registration date.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::collation::collate;
use super::filter::{Bounds, Choice};
use super::pipeline::QueryProfile;
use super::stats::{distinct_values, CategoryCounts};
use crate::models::{Contractor, ContractorStatus, PersonType};

/// Filters of the contractor list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContractorFilter {
    pub search: String,
    pub status: Choice<ContractorStatus>,
    pub person_type: Choice<PersonType>,
    pub specialty: Choice<String>,
    /// Registration date, inclusive
    pub created: Bounds<NaiveDate>,
}

impl ContractorFilter {
    /// Reset every filter to its neutral value
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sortable contractor fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractorSortField {
    #[default]
    Name,
    Code,
    Rut,
    Specialty,
    CreatedAt,
}

impl fmt::Display for ContractorSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Code => write!(f, "code"),
            Self::Rut => write!(f, "rut"),
            Self::Specialty => write!(f, "specialty"),
            Self::CreatedAt => write!(f, "created"),
        }
    }
}

impl FromStr for ContractorSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "nombre" => Ok(Self::Name),
            "code" | "codigo" => Ok(Self::Code),
            "rut" => Ok(Self::Rut),
            "specialty" | "especialidad" => Ok(Self::Specialty),
            "created" | "created_at" | "fecha" => Ok(Self::CreatedAt),
            other => Err(format!("unknown contractor sort field '{}'", other)),
        }
    }
}

/// Counts over the filtered contractors
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorStats {
    pub total: usize,
    pub by_status: CategoryCounts<ContractorStatus>,
    pub by_type: CategoryCounts<PersonType>,
}

/// Query profile for contractors
pub struct ContractorQuery;

impl QueryProfile for ContractorQuery {
    type Entity = Contractor;
    type Filter = ContractorFilter;
    type SortField = ContractorSortField;
    type Stats = ContractorStats;

    fn search_term(filter: &ContractorFilter) -> &str {
        &filter.search
    }

    fn search_fields(entity: &Contractor) -> Vec<&str> {
        vec![
            entity.code.as_str(),
            entity.name.as_str(),
            entity.rut.as_str(),
            entity.email.as_str(),
        ]
    }

    fn matches_filter(entity: &Contractor, filter: &ContractorFilter) -> bool {
        filter.status.admits(&entity.status)
            && filter.person_type.admits(&entity.person_type)
            && filter.specialty.admits(&entity.specialty)
            && filter.created.contains(&entity.created_at.date_naive())
    }

    fn compare(field: ContractorSortField, a: &Contractor, b: &Contractor) -> Ordering {
        match field {
            ContractorSortField::Name => collate(&a.name, &b.name),
            ContractorSortField::Code => collate(&a.code, &b.code),
            ContractorSortField::Rut => collate(&a.rut, &b.rut),
            ContractorSortField::Specialty => collate(&a.specialty, &b.specialty),
            ContractorSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }

    fn tally(stats: &mut ContractorStats, entity: &Contractor) {
        stats.total += 1;
        stats.by_status.increment(entity.status);
        stats.by_type.increment(entity.person_type);
    }
}

/// Specialties for the filter dropdown, taken from the unfiltered list
pub fn specialty_options(contractors: &[Contractor]) -> Vec<String> {
    distinct_values(contractors.iter().map(|c| c.specialty.as_str()))
}
