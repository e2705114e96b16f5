//! User settings for finance-visualizer
//!
//! Display preferences: currency symbol, fallback chart colors, and the
//! range of months offered by period pickers.

use serde::{Deserialize, Serialize};

use super::paths::FinvizPaths;
use crate::error::FinanceError;

/// User settings, stored as `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts in reports and insights
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Color used when a category has no color of its own
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Color of comparison rows for spending with no budget
    #[serde(default = "default_unbudgeted_color")]
    pub unbudgeted_color: String,

    /// Months before the current one offered by period pickers
    #[serde(default = "default_months_before")]
    pub months_before: u32,

    /// Months after the current one offered by period pickers
    #[serde(default = "default_months_after")]
    pub months_after: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_color() -> String {
    crate::reports::DEFAULT_COLOR.to_string()
}

fn default_unbudgeted_color() -> String {
    crate::reports::UNBUDGETED_COLOR.to_string()
}

fn default_months_before() -> u32 {
    6
}

fn default_months_after() -> u32 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_color: default_color(),
            unbudgeted_color: default_unbudgeted_color(),
            months_before: default_months_before(),
            months_after: default_months_after(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file is absent
    pub fn load_or_create(paths: &FinvizPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents)
                .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinvizPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
