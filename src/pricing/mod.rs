//! Pricing for budget lines
//!
//! - `cascade`: per-line derived values
//! - `totals`: budget-level aggregation

pub mod cascade;
pub mod totals;

pub use cascade::{
    coerce_amount, compute_line_item, parse_lenient, LinePricing, PricingInput,
    DEFAULT_TAX_PERCENT,
};
pub use totals::{compute_budget_totals, compute_header_summary, BudgetTotals, HEADER_TAX_RATE};
