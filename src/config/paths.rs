//! Path management for WealthWise
//!
//! ## Path Resolution Order
//!
//! 1. `WEALTHWISE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wealthwise` or `~/.config/wealthwise`
//! 3. Windows: `%APPDATA%\wealthwise`

use std::path::PathBuf;

use crate::error::WealthError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "WEALTHWISE_DATA_DIR";

/// Manages all paths used by WealthWise
#[derive(Debug, Clone)]
pub struct WealthPaths {
    base_dir: PathBuf,
}

impl WealthPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, WealthError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create WealthPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the persisted budget state
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default directory for snapshot exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// The persisted budget store
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), WealthError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.export_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                WealthError::Io(format!("Failed to create directory {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Check if WealthWise has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WealthError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("wealthwise"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| WealthError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("wealthwise"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WealthError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WealthError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wealthwise"))
}
