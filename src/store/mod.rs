//! Budget state store
//!
//! `BudgetStore` is the single source of truth for budget entities during a
//! session: category allocations and spending, savings goals, alerts, the
//! monthly history and the overview scalars. It is a plain value owned by the
//! caller and handed around by reference; every operation runs to completion
//! and leaves all derived fields (`percentage`, `budgetTotal`) consistent.
//!
//! The store never touches the filesystem. Snapshots are produced and consumed
//! as values or strings, and persistence is done by [`crate::storage`].

mod seed;
pub mod snapshot;

pub use snapshot::{BudgetSnapshot, ImportSummary, SnapshotImport};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{WealthError, WealthResult};
use crate::models::{
    AlertId, AlertSeverity, BudgetAlert, BudgetCategory, BudgetGoal, GoalId, Money,
    MonthlySnapshot, NewGoal,
};

/// Percentage above which a category raises a warning
pub const DEFAULT_ALERT_THRESHOLD: i64 = 90;

/// Overview aggregates shown at the top of the budget page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub budget_total: Money,
    pub budget_spent: Money,
    pub budget_remaining: Money,
    pub percent_spent: i64,
    pub income: Money,
    pub savings_rate: u8,
    pub current_month: String,
}

/// Result of recording spend against a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendOutcome {
    /// Category percentage before the entry
    pub previous_percentage: i64,
    /// Category percentage after the entry
    pub percentage: i64,
    /// Warning raised if the entry crossed the alert threshold
    pub alert: Option<BudgetAlert>,
}

/// In-memory budget state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStore {
    budget_total: Money,
    budget_spent: Money,
    income: Money,
    savings_rate: u8,
    current_month: String,
    categories: Vec<BudgetCategory>,
    goals: Vec<BudgetGoal>,
    alerts: Vec<BudgetAlert>,
    monthly_data: Vec<MonthlySnapshot>,

    #[serde(default = "first_goal_id")]
    next_goal_id: GoalId,
    #[serde(default = "first_alert_id")]
    next_alert_id: AlertId,

    #[serde(skip, default = "default_alert_threshold")]
    alert_threshold: i64,
}

fn first_goal_id() -> GoalId {
    GoalId::FIRST
}

fn first_alert_id() -> AlertId {
    AlertId::FIRST
}

fn default_alert_threshold() -> i64 {
    DEFAULT_ALERT_THRESHOLD
}

impl Default for BudgetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            budget_total: Money::zero(),
            budget_spent: Money::zero(),
            income: Money::zero(),
            savings_rate: 0,
            current_month: String::new(),
            categories: Vec::new(),
            goals: Vec::new(),
            alerts: Vec::new(),
            monthly_data: Vec::new(),
            next_goal_id: GoalId::FIRST,
            next_alert_id: AlertId::FIRST,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }

    /// Set the percentage above which `record_spend` raises a warning
    pub fn with_alert_threshold(mut self, threshold: i64) -> Self {
        self.alert_threshold = threshold;
        self
    }

    pub fn alert_threshold(&self) -> i64 {
        self.alert_threshold
    }

    // === Reads ===

    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    /// Find a category by exact name
    pub fn category(&self, name: &str) -> Option<&BudgetCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn goals(&self) -> &[BudgetGoal] {
        &self.goals
    }

    pub fn goal(&self, id: GoalId) -> Option<&BudgetGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn alerts(&self) -> &[BudgetAlert] {
        &self.alerts
    }

    pub fn monthly_data(&self) -> &[MonthlySnapshot] {
        &self.monthly_data
    }

    pub fn budget_total(&self) -> Money {
        self.budget_total
    }

    pub fn budget_spent(&self) -> Money {
        self.budget_spent
    }

    pub fn budget_remaining(&self) -> Money {
        self.budget_total - self.budget_spent
    }

    /// round(budgetSpent / budgetTotal * 100), 0 for an empty budget
    pub fn percent_spent(&self) -> i64 {
        self.budget_spent.percent_of(self.budget_total)
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn savings_rate(&self) -> u8 {
        self.savings_rate
    }

    pub fn current_month(&self) -> &str {
        &self.current_month
    }

    /// All overview aggregates in one value
    pub fn overview(&self) -> BudgetOverview {
        BudgetOverview {
            budget_total: self.budget_total,
            budget_spent: self.budget_spent,
            budget_remaining: self.budget_remaining(),
            percent_spent: self.percent_spent(),
            income: self.income,
            savings_rate: self.savings_rate,
            current_month: self.current_month.clone(),
        }
    }

    // === Categories ===

    /// Add a new category and fold its allocation into `budgetTotal`
    pub fn add_category(&mut self, mut category: BudgetCategory) -> WealthResult<()> {
        category.name = category.name.trim().to_string();
        category
            .validate()
            .map_err(|e| WealthError::Validation(e.to_string()))?;

        if self.category(&category.name).is_some() {
            return Err(WealthError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        let total = allocation_total(
            self.categories
                .iter()
                .map(|c| c.allocated)
                .chain([category.allocated]),
        )?;

        category.refresh_percentage();
        self.categories.push(category);
        self.budget_total = total;
        Ok(())
    }

    /// Change a category's monthly allocation
    ///
    /// Refreshes the category percentage and recomputes `budgetTotal` as the
    /// sum of all allocations.
    pub fn update_category_allocation(
        &mut self,
        name: &str,
        new_allocated: Money,
    ) -> WealthResult<()> {
        if !new_allocated.is_positive() {
            return Err(WealthError::Validation(format!(
                "Allocation must be greater than zero, got {}",
                new_allocated
            )));
        }

        let index = self.category_index(name)?;
        let total = allocation_total(self.categories.iter().enumerate().map(|(i, c)| {
            if i == index {
                new_allocated
            } else {
                c.allocated
            }
        }))?;

        self.categories[index].set_allocated(new_allocated);
        self.budget_total = total;
        Ok(())
    }

    /// Record a budget entry against a category
    ///
    /// Adds `amount` to the category's spent total and to `budgetSpent`. When
    /// the category moves from at-or-below the alert threshold to above it, a
    /// warning alert is appended. Staying above the threshold raises nothing.
    pub fn record_spend(&mut self, category_name: &str, amount: Money) -> WealthResult<SpendOutcome> {
        if !amount.is_positive() {
            return Err(WealthError::Validation(format!(
                "Amount must be greater than zero, got {}",
                amount
            )));
        }

        let threshold = self.alert_threshold;
        let index = self.category_index(category_name)?;

        // Both totals are checked before anything changes
        let too_large = || {
            WealthError::Validation(format!(
                "Recording {} would take a total past {}",
                amount,
                Money::MAX
            ))
        };
        self.categories[index]
            .spent
            .checked_add(amount)
            .ok_or_else(too_large)?;
        let budget_spent = self.budget_spent.checked_add(amount).ok_or_else(too_large)?;

        let category = &mut self.categories[index];
        let previous_percentage = category.percentage;
        category.add_spent(amount);
        let percentage = category.percentage;

        let alert = if previous_percentage <= threshold && percentage > threshold {
            let id = self.take_alert_id();
            let alert = BudgetAlert::category_threshold(id, category_name, percentage);
            self.alerts.push(alert.clone());
            Some(alert)
        } else {
            None
        };

        self.budget_spent = budget_spent;

        Ok(SpendOutcome {
            previous_percentage,
            percentage,
            alert,
        })
    }

    fn category_index(&self, name: &str) -> WealthResult<usize> {
        self.categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| WealthError::category_not_found(name))
    }

    // === Goals ===

    /// Add a goal, assigning the next id
    pub fn add_goal(&mut self, draft: NewGoal) -> WealthResult<GoalId> {
        if draft.name.trim().is_empty() {
            return Err(WealthError::Validation("Goal name cannot be empty".into()));
        }
        validate_goal_amounts(draft.current, draft.target)?;
        Ok(self.push_goal(draft))
    }

    fn push_goal(&mut self, draft: NewGoal) -> GoalId {
        let id = self.next_goal_id;
        self.next_goal_id = id.next();
        self.goals.push(BudgetGoal::from_draft(id, draft));
        id
    }

    /// Replace a goal's current and target amounts
    pub fn update_goal(&mut self, id: GoalId, current: Money, target: Money) -> WealthResult<()> {
        validate_goal_amounts(current, target)?;

        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| WealthError::goal_not_found(id.value()))?;

        goal.set_progress(current, target);
        Ok(())
    }

    // === Alerts ===

    /// Append an alert, assigning the next id
    pub fn raise_alert(&mut self, message: impl Into<String>, severity: AlertSeverity) -> AlertId {
        let id = self.take_alert_id();
        self.alerts.push(BudgetAlert::new(id, message, severity));
        id
    }

    /// Remove an alert. Returns the removed alert, or `None` if no alert had
    /// that id.
    pub fn dismiss_alert(&mut self, id: AlertId) -> Option<BudgetAlert> {
        let index = self.alerts.iter().position(|a| a.id == id)?;
        Some(self.alerts.remove(index))
    }

    fn take_alert_id(&mut self) -> AlertId {
        let id = self.next_alert_id;
        self.next_alert_id = id.next();
        id
    }

    // === Overview scalars and history ===

    pub fn set_current_month(&mut self, label: impl Into<String>) {
        self.current_month = label.into();
    }

    pub fn set_income(&mut self, income: Money) -> WealthResult<()> {
        if income.is_negative() {
            return Err(WealthError::Validation("Income cannot be negative".into()));
        }
        if !income.is_in_range() {
            return Err(WealthError::Validation(format!(
                "Income cannot exceed {}",
                Money::MAX
            )));
        }
        self.income = income;
        Ok(())
    }

    pub fn set_savings_rate(&mut self, percent: u8) -> WealthResult<()> {
        if percent > 100 {
            return Err(WealthError::Validation(format!(
                "Savings rate must be between 0 and 100, got {}",
                percent
            )));
        }
        self.savings_rate = percent;
        Ok(())
    }

    /// Append a month to the history
    pub fn record_month(&mut self, month: MonthlySnapshot) -> WealthResult<()> {
        if month.name.trim().is_empty() {
            return Err(WealthError::Validation("Month label cannot be empty".into()));
        }
        if month.budget.is_negative() || month.spent.is_negative() {
            return Err(WealthError::Validation(
                "Monthly amounts cannot be negative".into(),
            ));
        }
        if !month.budget.is_in_range() || !month.spent.is_in_range() {
            return Err(WealthError::Validation(format!(
                "Monthly amounts cannot exceed {}",
                Money::MAX
            )));
        }
        self.monthly_data.push(month);
        Ok(())
    }

    // === Snapshots ===

    /// Bundle the current state for export, stamped with the current time
    pub fn export_snapshot(&self) -> BudgetSnapshot {
        self.export_snapshot_at(Utc::now())
    }

    /// Bundle the current state for export with an explicit timestamp
    pub fn export_snapshot_at(&self, export_date: DateTime<Utc>) -> BudgetSnapshot {
        BudgetSnapshot {
            budget_total: self.budget_total,
            budget_spent: self.budget_spent,
            budget_remaining: self.budget_remaining(),
            percent_spent: self.percent_spent(),
            income: self.income,
            savings_rate: self.savings_rate,
            categories: self.categories.clone(),
            goals: self.goals.clone(),
            monthly_data: self.monthly_data.clone(),
            export_date,
        }
    }

    /// Parse a JSON snapshot and apply every key it carries
    ///
    /// The payload is fully parsed and validated before anything is applied,
    /// so a malformed import returns `WealthError::Parse` with the store left
    /// exactly as it was.
    pub fn import_snapshot(&mut self, raw: &str) -> WealthResult<ImportSummary> {
        let import = SnapshotImport::parse(raw)?;
        Ok(self.apply_import(import))
    }

    /// Apply an already validated import
    pub fn apply_import(&mut self, import: SnapshotImport) -> ImportSummary {
        let mut summary = ImportSummary::default();

        if let Some(categories) = import.categories {
            summary.categories = Some(categories.len());
            self.categories = categories;
        }

        if let Some(monthly_data) = import.monthly_data {
            summary.months = Some(monthly_data.len());
            self.monthly_data = monthly_data;
        }

        if let Some(total) = import.budget_total {
            summary.budget_total = true;
            self.budget_total = total;
        }

        if let Some(spent) = import.budget_spent {
            summary.budget_spent = true;
            self.budget_spent = spent;
        }

        summary
    }

    /// Check the invariants a persisted store must satisfy before use
    ///
    /// Categories must be valid with unique names, goals and months must hold
    /// in-range non-negative amounts, ids must be unique and the overview
    /// scalars must be in range. Reports the first problem found.
    pub fn validate(&self) -> WealthResult<()> {
        let invalid = |msg: String| Err(WealthError::Validation(msg));

        let mut names = HashSet::new();
        for category in &self.categories {
            if let Err(e) = category.validate() {
                return invalid(format!("category '{}': {}", category.name, e));
            }
            if !names.insert(category.name.as_str()) {
                return invalid(format!("duplicate category name '{}'", category.name));
            }
        }
        allocation_total(self.categories.iter().map(|c| c.allocated))?;

        let mut goal_ids = HashSet::new();
        for goal in &self.goals {
            validate_goal_amounts(goal.current, goal.target)
                .map_err(|e| WealthError::Validation(format!("goal {}: {}", goal.id, e)))?;
            if !goal_ids.insert(goal.id) {
                return invalid(format!("duplicate goal id {}", goal.id));
            }
        }

        let mut alert_ids = HashSet::new();
        for alert in &self.alerts {
            if !alert_ids.insert(alert.id) {
                return invalid(format!("duplicate alert id {}", alert.id));
            }
        }

        for month in &self.monthly_data {
            let ok = |m: Money| !m.is_negative() && m.is_in_range();
            if !ok(month.budget) || !ok(month.spent) {
                return invalid(format!("month '{}' has an invalid amount", month.name));
            }
        }

        for (key, value) in [
            ("budgetTotal", self.budget_total),
            ("budgetSpent", self.budget_spent),
            ("income", self.income),
        ] {
            if value.is_negative() || !value.is_in_range() {
                return invalid(format!("{} is out of range: {}", key, value));
            }
        }
        if self.savings_rate > 100 {
            return invalid(format!("savingsRate {} is above 100", self.savings_rate));
        }

        Ok(())
    }

    /// Restore the invariants a persisted store may have lost: derived
    /// percentages and id counters at least one past the highest id in use.
    pub fn reconcile(&mut self) {
        for category in &mut self.categories {
            category.refresh_percentage();
        }
        for goal in &mut self.goals {
            goal.percentage = goal.current.percent_of(goal.target);
        }

        if let Some(max) = self.goals.iter().map(|g| g.id).max() {
            if self.next_goal_id <= max {
                self.next_goal_id = max.next();
            }
        }
        if let Some(max) = self.alerts.iter().map(|a| a.id).max() {
            if self.next_alert_id <= max {
                self.next_alert_id = max.next();
            }
        }
    }
}

/// Sum of allocations for `budgetTotal`, refusing totals past `Money::MAX`
fn allocation_total<I: IntoIterator<Item = Money>>(allocations: I) -> WealthResult<Money> {
    Money::checked_sum(allocations).ok_or_else(|| {
        WealthError::Validation(format!("Total allocation would exceed {}", Money::MAX))
    })
}

fn validate_goal_amounts(current: Money, target: Money) -> WealthResult<()> {
    if current.is_negative() {
        return Err(WealthError::Validation(
            "Goal current amount cannot be negative".into(),
        ));
    }
    if !target.is_positive() {
        return Err(WealthError::Validation(
            "Goal target must be greater than zero".into(),
        ));
    }
    if !current.is_in_range() || !target.is_in_range() {
        return Err(WealthError::Validation(format!(
            "Goal amounts cannot exceed {}",
            Money::MAX
        )));
    }
    Ok(())
}
