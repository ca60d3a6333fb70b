//! User settings for WealthWise
//!
//! Currency display, the spending alert threshold and export preferences,
//! persisted as `config.json` in the base directory.

use serde::{Deserialize, Serialize};

use super::paths::WealthPaths;
use crate::error::WealthError;
use crate::store::DEFAULT_ALERT_THRESHOLD;

/// User settings for WealthWise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// A category raises a warning when its percentage rises above this
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: i64,

    /// Pretty-print exported JSON
    #[serde(default = "default_true")]
    pub export_pretty: bool,

    /// Start a fresh budget from the demo data instead of an empty one
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_alert_threshold() -> i64 {
    DEFAULT_ALERT_THRESHOLD
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            alert_threshold: default_alert_threshold(),
            export_pretty: true,
            seed_demo_data: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &WealthPaths) -> Result<Self, WealthError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| WealthError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| WealthError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WealthPaths) -> Result<(), WealthError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WealthError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WealthError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), WealthError> {
        if !(1..=1000).contains(&self.alert_threshold) {
            return Err(WealthError::Config(format!(
                "alert_threshold must be between 1 and 1000, got {}",
                self.alert_threshold
            )));
        }
        Ok(())
    }
}
