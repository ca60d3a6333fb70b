//! Budget service
//!
//! Runs one store operation at a time on behalf of the CLI: applies it to the
//! in-memory `BudgetStore`, persists the result and records an audit entry.
//! Edit-boundary checks that the store leaves to its caller (a goal's current
//! amount not exceeding its target) are enforced here.

use std::path::{Path, PathBuf};

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::error::{WealthError, WealthResult};
use crate::export::{render_snapshot, ExportFormat};
use crate::models::{
    AlertId, BudgetAlert, BudgetCategory, BudgetGoal, GoalId, Money, MonthlySnapshot, NewGoal,
};
use crate::storage::{read_text, write_text_atomic, Storage};
use crate::store::{BudgetStore, ImportSummary, SpendOutcome};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
    store: BudgetStore,
}

impl<'a> BudgetService<'a> {
    /// Load the persisted budget
    pub fn load(storage: &'a Storage) -> WealthResult<Self> {
        let store = storage.load_store()?;
        Ok(Self { storage, store })
    }

    pub fn store(&self) -> &BudgetStore {
        &self.store
    }

    fn save(&self) -> WealthResult<()> {
        self.storage.save_store(&self.store)
    }

    /// Look up a category, failing with `NotFound`
    pub fn find_category(&self, name: &str) -> WealthResult<&BudgetCategory> {
        self.store
            .category(name)
            .ok_or_else(|| WealthError::category_not_found(name))
    }

    fn find_goal(&self, id: GoalId) -> WealthResult<&BudgetGoal> {
        self.store
            .goal(id)
            .ok_or_else(|| WealthError::goal_not_found(id.value()))
    }

    // === Categories ===

    pub fn add_category(&mut self, category: BudgetCategory) -> WealthResult<BudgetCategory> {
        let name = category.name.trim().to_string();
        self.store.add_category(category)?;
        self.save()?;

        let created = self.find_category(&name)?.clone();
        self.storage
            .log_create(EntityType::Category, &created.name, &created)?;
        Ok(created)
    }

    pub fn allocate(&mut self, name: &str, allocated: Money) -> WealthResult<BudgetCategory> {
        let before = self.find_category(name)?.clone();
        self.store.update_category_allocation(name, allocated)?;
        self.save()?;

        let after = self.find_category(name)?.clone();
        self.storage.log_update(
            EntityType::Category,
            name,
            &before,
            &after,
            Some(format!("allocated: {} -> {}", before.allocated, after.allocated)),
        )?;
        Ok(after)
    }

    /// Record a budget entry; any threshold alert is audited as well
    pub fn record_spend(&mut self, name: &str, amount: Money) -> WealthResult<SpendOutcome> {
        let before = self.find_category(name)?.clone();
        let outcome = self.store.record_spend(name, amount)?;
        self.save()?;

        let after = self.find_category(name)?.clone();
        self.storage.log_update(
            EntityType::Category,
            name,
            &before,
            &after,
            Some(format!("spent: {} -> {}", before.spent, after.spent)),
        )?;
        if let Some(alert) = &outcome.alert {
            self.storage
                .log_create(EntityType::Alert, alert.id.to_string(), alert)?;
        }
        Ok(outcome)
    }

    // === Goals ===

    pub fn add_goal(&mut self, draft: NewGoal) -> WealthResult<BudgetGoal> {
        check_goal_progress(draft.current, draft.target)?;
        let id = self.store.add_goal(draft)?;
        self.save()?;

        let goal = self.find_goal(id)?.clone();
        self.storage
            .log_create(EntityType::Goal, id.to_string(), &goal)?;
        Ok(goal)
    }

    pub fn update_goal(&mut self, id: GoalId, current: Money, target: Money) -> WealthResult<BudgetGoal> {
        check_goal_progress(current, target)?;
        let before = self.find_goal(id)?.clone();
        self.store.update_goal(id, current, target)?;
        self.save()?;

        let after = self.find_goal(id)?.clone();
        self.storage.log_update(
            EntityType::Goal,
            id.to_string(),
            &before,
            &after,
            Some(format!("{}% -> {}%", before.percentage, after.percentage)),
        )?;
        Ok(after)
    }

    // === Alerts ===

    /// Dismiss an alert; `None` if no alert had that id
    pub fn dismiss_alert(&mut self, id: AlertId) -> WealthResult<Option<BudgetAlert>> {
        let Some(alert) = self.store.dismiss_alert(id) else {
            return Ok(None);
        };
        self.save()?;
        self.storage
            .log_delete(EntityType::Alert, id.to_string(), &alert)?;
        Ok(Some(alert))
    }

    // === Overview and history ===

    pub fn set_current_month(&mut self, label: &str) -> WealthResult<()> {
        let before = self.store.current_month().to_string();
        self.store.set_current_month(label);
        self.save()?;
        self.storage.log_update(
            EntityType::Overview,
            "currentMonth",
            &before,
            &label.to_string(),
            None,
        )
    }

    pub fn record_month(&mut self, month: MonthlySnapshot) -> WealthResult<()> {
        self.store.record_month(month.clone())?;
        self.save()?;
        self.storage
            .log_create(EntityType::Month, &month.name, &month)
    }

    /// Update income and/or savings rate; both apply or neither does
    pub fn set_income(&mut self, income: Option<Money>, savings_rate: Option<u8>) -> WealthResult<()> {
        let before = self.store.overview();
        let mut next = self.store.clone();
        if let Some(income) = income {
            next.set_income(income)?;
        }
        if let Some(rate) = savings_rate {
            next.set_savings_rate(rate)?;
        }
        self.store = next;
        self.save()?;

        let after = self.store.overview();
        self.storage
            .log_update(EntityType::Overview, "income", &before, &after, None)
    }

    // === Snapshots ===

    /// Export the budget to `output`, or to the export directory under the
    /// conventional file name. Returns the path written.
    pub fn export(&self, output: Option<&Path>, format: ExportFormat) -> WealthResult<PathBuf> {
        let snapshot = self.store.export_snapshot();
        let contents = render_snapshot(&snapshot, format, self.storage.settings().export_pretty)?;

        let path = match output {
            Some(path) => path.to_path_buf(),
            None => self
                .storage
                .paths()
                .export_dir()
                .join(format.file_name(&snapshot)),
        };
        write_text_atomic(&path, &contents)?;

        self.storage.audit().log(&AuditEntry::snapshot(
            Operation::Export,
            path.display().to_string(),
            format!(
                "{} categories, {} goals, {} months",
                snapshot.categories.len(),
                snapshot.goals.len(),
                snapshot.monthly_data.len()
            ),
        ))?;
        Ok(path)
    }

    /// Import a JSON snapshot file
    ///
    /// The file is read completely before anything is parsed; a failed read or
    /// a malformed payload leaves the saved budget untouched.
    pub fn import(&mut self, path: &Path) -> WealthResult<ImportSummary> {
        let raw = read_text(path)?;
        let summary = self.store.import_snapshot(&raw)?;
        self.save()?;

        self.storage.audit().log(&AuditEntry::snapshot(
            Operation::Import,
            path.display().to_string(),
            describe_import(&summary),
        ))?;
        Ok(summary)
    }
}

fn check_goal_progress(current: Money, target: Money) -> WealthResult<()> {
    if current > target {
        return Err(WealthError::Validation(format!(
            "Current amount {} exceeds target {}",
            current, target
        )));
    }
    Ok(())
}

/// Short description of what an import replaced
pub fn describe_import(summary: &ImportSummary) -> String {
    let mut parts = Vec::new();
    if let Some(n) = summary.categories {
        parts.push(format!("{} categories", n));
    }
    if let Some(n) = summary.months {
        parts.push(format!("{} months", n));
    }
    if summary.budget_total {
        parts.push("budget total".to_string());
    }
    if summary.budget_spent {
        parts.push("budget spent".to_string());
    }

    if parts.is_empty() {
        "nothing to import".to_string()
    } else {
        parts.join(", ")
    }
}
