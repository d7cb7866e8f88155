//! Configuration module for Quotebook
//!
//! Path resolution and persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::QuotebookPaths;
pub use settings::Settings;
