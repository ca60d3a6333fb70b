//! Storage initialization
//!
//! Handles first-run setup: settings file, directories and the initial budget.

use crate::config::{Settings, WealthPaths};
use crate::error::WealthError;

use super::Storage;

/// Initialize storage for a fresh installation
///
/// Writes the settings file if missing and persists the starting budget if no
/// budget has been saved yet. Returns `true` if a new budget was written.
pub fn initialize_storage(paths: &WealthPaths) -> Result<bool, WealthError> {
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        Settings::default().save(paths)?;
    }

    let storage = Storage::open(paths.clone())?;
    if storage.has_saved_store() {
        return Ok(false);
    }

    let store = storage.fresh_store();
    storage.save_store(&store)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WealthPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(initialize_storage(&paths).unwrap());
        assert!(paths.settings_file().exists());
        assert!(paths.budget_file().exists());

        assert!(!initialize_storage(&paths).unwrap());
    }
}
