//! Provider model
//!
//! Material and equipment providers with the products they list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{ProductId, ProviderId};

/// Whether a provider is currently used
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProviderStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    Inactive,
}

impl ProviderStatus {
    pub const ALL: [ProviderStatus; 2] = [ProviderStatus::Active, ProviderStatus::Inactive];
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Activo"),
            Self::Inactive => write!(f, "Inactivo"),
        }
    }
}

impl FromStr for ProviderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activo" | "active" => Ok(Self::Active),
            "inactivo" | "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown provider status '{}'", other)),
        }
    }
}

/// A product listed by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub unit_price: f64,
}

/// A provider of materials, tools or equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Unique identifier
    pub id: ProviderId,

    /// Internal short code (e.g. "PRV-003")
    pub code: String,

    /// Business name
    pub name: String,

    pub rut: String,

    /// Free-form category (e.g. "Materiales", "Arriendo de equipos")
    #[serde(default)]
    pub category: String,

    pub status: ProviderStatus,

    #[serde(default)]
    pub contact_email: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub products: Vec<ProviderProduct>,

    /// When the provider was registered
    pub created_at: DateTime<Utc>,
}

impl Provider {
    /// Create an active provider registered now
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        rut: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProviderId::new(),
            code: code.into(),
            name: name.into(),
            rut: rut.into(),
            category: category.into(),
            status: ProviderStatus::Active,
            contact_email: String::new(),
            city: String::new(),
            products: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Number of listed products
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
