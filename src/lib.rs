//! Quotebook - pricing and list queries for construction-services budgets
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `pricing`: Per-line pricing cascade and budget totals
//! - `query`: Generic filter, sort and stats pipeline for list screens
//! - `models`: Budget rows, contractors, providers, issued budgets, RUTs
//! - `services`: Budget sheet editing
//! - `config`: Paths and user settings
//! - `storage`: JSON data files
//! - `display`, `export`, `cli`: Terminal output and command handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use quotebook::pricing::{compute_line_item, PricingInput};
//!
//! let pricing = compute_line_item(&PricingInput::new(1000.0, 1.0, 10.0, 19.0));
//! assert_eq!(pricing.net_value, 1000.0);
//! assert!((pricing.total - 1309.0).abs() < 1e-9);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod pricing;
pub mod query;
pub mod services;
pub mod storage;

pub use error::{QuotebookError, QuotebookResult};
