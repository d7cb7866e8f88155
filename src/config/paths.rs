//! Path management for Quotebook
//!
//! ## Path Resolution Order
//!
//! 1. `QUOTEBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (e.g. `~/.config/quotebook` on Linux)

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::QuotebookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "QUOTEBOOK_DATA_DIR";

/// Manages all paths used by Quotebook
#[derive(Debug, Clone)]
pub struct QuotebookPaths {
    base_dir: PathBuf,
}

impl QuotebookPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, QuotebookError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the entity files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn contractors_file(&self) -> PathBuf {
        self.data_dir().join("contractors.json")
    }

    pub fn providers_file(&self) -> PathBuf {
        self.data_dir().join("providers.json")
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Create the base and data directories if missing
    pub fn ensure_directories(&self) -> Result<(), QuotebookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| QuotebookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| QuotebookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, QuotebookError> {
    ProjectDirs::from("cl", "quotebook", "quotebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| QuotebookError::Config("Could not determine a home directory".into()))
}
