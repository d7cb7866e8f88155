//! User settings for Quotebook
//!
//! Presentation preferences and the tax applied to new budget rows. The
//! pricing and query code never reads these; callers pass them in.

use serde::{Deserialize, Serialize};

use super::paths::QuotebookPaths;
use crate::error::QuotebookError;
use crate::pricing::DEFAULT_TAX_PERCENT;

/// User settings for Quotebook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Tax percentage given to newly added budget rows
    #[serde(default = "default_tax_percent")]
    pub default_tax_percent: f64,

    /// Decimals printed for money amounts
    #[serde(default)]
    pub amount_decimals: usize,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Maximum rows printed per list in table output
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tax_percent() -> f64 {
    DEFAULT_TAX_PERCENT
}

fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}

fn default_page_size() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_tax_percent: default_tax_percent(),
            amount_decimals: 0,
            date_format: default_date_format(),
            page_size: default_page_size(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &QuotebookPaths) -> Result<Self, QuotebookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                QuotebookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                QuotebookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &QuotebookPaths) -> Result<(), QuotebookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            QuotebookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            QuotebookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_tax_percent, 19.0);
        assert_eq!(settings.amount_decimals, 0);
        assert_eq!(settings.date_format, "%d-%m-%Y");
        assert_eq!(settings.page_size, 50);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotebookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_tax_percent: 10.0,
            amount_decimals: 2,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"amount_decimals": 2}"#).unwrap();
        assert_eq!(settings.amount_decimals, 2);
        assert_eq!(settings.default_tax_percent, 19.0);
        assert_eq!(settings.page_size, 50);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, QuotebookError::Config(_)));
    }
}
