//! Contractor model
//!
//! Contractors are supplied by the external data source already validated;
//! this crate only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ContractorId;

/// Legal nature of a contractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PersonType {
    #[serde(rename = "natural")]
    Natural,
    #[serde(rename = "empresa")]
    Company,
}

impl PersonType {
    pub const ALL: [PersonType; 2] = [PersonType::Natural, PersonType::Company];
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural => write!(f, "natural"),
            Self::Company => write!(f, "empresa"),
        }
    }
}

impl FromStr for PersonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "natural" | "persona" => Ok(Self::Natural),
            "empresa" | "company" => Ok(Self::Company),
            other => Err(format!("unknown person type '{}'", other)),
        }
    }
}

/// Engagement status of a contractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContractorStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    Inactive,
    #[serde(rename = "Suspendido")]
    Suspended,
}

impl ContractorStatus {
    pub const ALL: [ContractorStatus; 3] = [
        ContractorStatus::Active,
        ContractorStatus::Inactive,
        ContractorStatus::Suspended,
    ];
}

impl fmt::Display for ContractorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Activo"),
            Self::Inactive => write!(f, "Inactivo"),
            Self::Suspended => write!(f, "Suspendido"),
        }
    }
}

impl FromStr for ContractorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activo" | "active" => Ok(Self::Active),
            "inactivo" | "inactive" => Ok(Self::Inactive),
            "suspendido" | "suspended" => Ok(Self::Suspended),
            other => Err(format!("unknown contractor status '{}'", other)),
        }
    }
}

/// A contractor available for budget work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contractor {
    /// Unique identifier
    pub id: ContractorId,

    /// Internal short code (e.g. "CTR-014")
    pub code: String,

    /// Full name or business name
    pub name: String,

    /// RUT as supplied by the data source
    pub rut: String,

    pub person_type: PersonType,

    pub status: ContractorStatus,

    /// Trade specialty (e.g. "Electricidad")
    #[serde(default)]
    pub specialty: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub city: String,

    /// When the contractor was registered
    pub created_at: DateTime<Utc>,
}

impl Contractor {
    /// Create an active contractor registered now
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        rut: impl Into<String>,
        person_type: PersonType,
    ) -> Self {
        Self {
            id: ContractorId::new(),
            code: code.into(),
            name: name.into(),
            rut: rut.into(),
            person_type,
            status: ContractorStatus::Active,
            specialty: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Contractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
