//! Core data models for Quotebook
//!
//! Budget lines plus the read-only entities listed by the query screens:
//! contractors, providers and historical budgets.

pub mod contractor;
pub mod historical_budget;
pub mod ids;
pub mod line_item;
pub mod provider;
pub mod rut;

pub use contractor::{Contractor, ContractorStatus, PersonType};
pub use historical_budget::{BudgetStatus, ClientRef, HistoricalBudget};
pub use ids::{BudgetId, ClientId, ContractorId, LineItemId, ProductId, ProviderId};
pub use line_item::{LineItem, LineItemError, LineItemRecord, LineKind};
pub use provider::{Provider, ProviderProduct, ProviderStatus};
pub use rut::{classify_person_type, Rut, RutParseError, COMPANY_RUT_THRESHOLD};
