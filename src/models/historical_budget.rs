//! Historical budget model
//!
//! Summary records of budgets already issued to clients, as listed in the
//! budget history screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{BudgetId, ClientId};

/// Lifecycle status of an issued budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BudgetStatus {
    #[serde(rename = "borrador")]
    Draft,
    #[serde(rename = "enviado")]
    Sent,
    #[serde(rename = "aprobado")]
    Approved,
    #[serde(rename = "rechazado")]
    Rejected,
}

impl BudgetStatus {
    pub const ALL: [BudgetStatus; 4] = [
        BudgetStatus::Draft,
        BudgetStatus::Sent,
        BudgetStatus::Approved,
        BudgetStatus::Rejected,
    ];
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "borrador"),
            Self::Sent => write!(f, "enviado"),
            Self::Approved => write!(f, "aprobado"),
            Self::Rejected => write!(f, "rechazado"),
        }
    }
}

impl FromStr for BudgetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "borrador" | "draft" => Ok(Self::Draft),
            "enviado" | "sent" => Ok(Self::Sent),
            "aprobado" | "approved" => Ok(Self::Approved),
            "rechazado" | "rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown budget status '{}'", other)),
        }
    }
}

/// Client a budget was issued to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: ClientId,
    pub name: String,
}

/// An issued budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalBudget {
    /// Unique identifier
    pub id: BudgetId,

    /// Sequential document number (e.g. "PRE-2024-031")
    pub folio: String,

    /// Project or work title
    pub title: String,

    pub client: ClientRef,

    pub status: BudgetStatus,

    #[serde(default)]
    pub net_amount: f64,

    #[serde(default)]
    pub tax_amount: f64,

    #[serde(default)]
    pub total_amount: f64,

    /// Number of priced lines in the budget
    #[serde(default)]
    pub item_count: usize,

    /// When the budget was created
    pub created_at: DateTime<Utc>,
}

impl HistoricalBudget {
    /// Create a draft budget created now with zero amounts
    pub fn new(folio: impl Into<String>, title: impl Into<String>, client: ClientRef) -> Self {
        Self {
            id: BudgetId::new(),
            folio: folio.into(),
            title: title.into(),
            client,
            status: BudgetStatus::Draft,
            net_amount: 0.0,
            tax_amount: 0.0,
            total_amount: 0.0,
            item_count: 0,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for HistoricalBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.folio, self.title)
    }
}
