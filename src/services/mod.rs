//! Service layer for Quotebook
//!
//! Stateful editing on top of the pure pricing functions.

pub mod budget_sheet;

pub use budget_sheet::{BudgetSheet, LineItemEdit};
