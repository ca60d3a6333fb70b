//! Storage layer for WealthWise
//!
//! The budget store is persisted as a single JSON document (`data/budget.json`)
//! written atomically. This is the only place the store's state meets the
//! filesystem; the store itself stays purely in memory.

pub mod file_io;
pub mod init;

pub use file_io::{read_json_optional, read_text, write_json_atomic, write_text_atomic};
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{Settings, WealthPaths};
use crate::error::WealthError;
use crate::store::BudgetStore;

/// Coordinates paths, settings, the persisted store and the audit log
pub struct Storage {
    paths: WealthPaths,
    settings: Settings,
    audit: AuditLogger,
}

impl Storage {
    /// Create a Storage instance, making sure the directories exist
    pub fn new(paths: WealthPaths, settings: Settings) -> Result<Self, WealthError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            paths,
            settings,
        })
    }

    /// Create a Storage instance with settings loaded from disk
    pub fn open(paths: WealthPaths) -> Result<Self, WealthError> {
        let settings = Settings::load_or_create(&paths)?;
        Self::new(paths, settings)
    }

    pub fn paths(&self) -> &WealthPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the persisted budget, or start a fresh one
    ///
    /// A fresh budget is the demo data or an empty store depending on
    /// `Settings::seed_demo_data`. A saved budget that breaks the store's
    /// invariants fails with `WealthError::Storage`.
    pub fn load_store(&self) -> Result<BudgetStore, WealthError> {
        let store = match read_json_optional::<BudgetStore, _>(self.paths.budget_file())? {
            Some(mut store) => {
                store.validate().map_err(|e| match e {
                    WealthError::Validation(msg) => WealthError::Storage(format!(
                        "{} is invalid: {}",
                        self.paths.budget_file().display(),
                        msg
                    )),
                    other => other,
                })?;
                store.reconcile();
                store
            }
            None => self.fresh_store(),
        };

        Ok(store.with_alert_threshold(self.settings.alert_threshold))
    }

    /// The store a new budget starts from
    pub fn fresh_store(&self) -> BudgetStore {
        let store = if self.settings.seed_demo_data {
            BudgetStore::with_demo_data()
        } else {
            BudgetStore::new()
        };
        store.with_alert_threshold(self.settings.alert_threshold)
    }

    /// Persist the budget store
    pub fn save_store(&self, store: &BudgetStore) -> Result<(), WealthError> {
        write_json_atomic(self.paths.budget_file(), store)
    }

    pub fn has_saved_store(&self) -> bool {
        self.paths.budget_file().exists()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), WealthError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Result<(), WealthError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            before,
            after,
            summary,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), WealthError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn test_storage(settings: Settings) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WealthPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, settings).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = test_storage(Settings::default());
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.has_saved_store());
    }

    #[test]
    fn test_fresh_store_follows_settings() {
        let (_temp, storage) = test_storage(Settings::default());
        assert_eq!(storage.load_store().unwrap().categories().len(), 6);

        let settings = Settings {
            seed_demo_data: false,
            ..Settings::default()
        };
        let (_temp, storage) = test_storage(settings);
        assert!(storage.load_store().unwrap().categories().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let settings = Settings {
            alert_threshold: 75,
            ..Settings::default()
        };
        let (_temp, storage) = test_storage(settings);

        let mut store = storage.load_store().unwrap();
        store.record_spend("Travel", Money::from_units(50)).unwrap();
        storage.save_store(&store).unwrap();

        let reloaded = storage.load_store().unwrap();
        assert_eq!(reloaded, store);
        assert_eq!(reloaded.alert_threshold(), 75);
        assert_eq!(
            reloaded.category("Travel").unwrap().spent,
            Money::from_units(50)
        );
    }

    fn write_budget(storage: &Storage, categories: &str) {
        let json = format!(
            r#"{{"budgetTotal": 100, "budgetSpent": 0, "income": 0, "savingsRate": 0,
               "currentMonth": "", "categories": {}, "goals": [], "alerts": [],
               "monthlyData": []}}"#,
            categories
        );
        std::fs::write(storage.paths().budget_file(), json).unwrap();
    }

    #[test]
    fn test_load_rejects_duplicate_category_names() {
        let (_temp, storage) = test_storage(Settings::default());
        write_budget(
            &storage,
            r#"[{"name": "Rent", "allocated": 50, "spent": 0},
                {"name": "Rent", "allocated": 50, "spent": 0}]"#,
        );

        let err = storage.load_store().unwrap_err();
        assert!(matches!(err, WealthError::Storage(_)));
        assert!(err.to_string().contains("duplicate category name 'Rent'"));
    }

    #[test]
    fn test_load_rejects_negative_amounts() {
        let (_temp, storage) = test_storage(Settings::default());
        write_budget(
            &storage,
            r#"[{"name": "Rent", "allocated": 100, "spent": -5}]"#,
        );

        let err = storage.load_store().unwrap_err();
        assert!(matches!(err, WealthError::Storage(_)));
        assert!(err.to_string().contains("budget.json is invalid"));
    }

    #[test]
    fn test_load_accepts_valid_saved_budget() {
        let (_temp, storage) = test_storage(Settings::default());
        write_budget(
            &storage,
            r#"[{"name": "Rent", "allocated": 100, "spent": 40}]"#,
        );

        let store = storage.load_store().unwrap();
        assert_eq!(store.category("Rent").unwrap().percentage, 40);
    }
}
