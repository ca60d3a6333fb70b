//! Budget snapshots: the JSON bundle used for export and import
//!
//! An export carries the full budget state plus derived overview fields and an
//! `exportDate`. An import accepts any subset of `categories`, `monthlyData`,
//! `budgetTotal` and `budgetSpent`; unknown keys are ignored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{WealthError, WealthResult};
use crate::models::{BudgetCategory, BudgetGoal, Money, MonthlySnapshot};

/// Full export of the budget state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    pub budget_total: Money,
    pub budget_spent: Money,
    pub budget_remaining: Money,
    pub percent_spent: i64,
    pub income: Money,
    pub savings_rate: u8,
    pub categories: Vec<BudgetCategory>,
    pub goals: Vec<BudgetGoal>,
    pub monthly_data: Vec<MonthlySnapshot>,
    pub export_date: DateTime<Utc>,
}

impl BudgetSnapshot {
    /// Conventional download name, `budget-export-<M-D-YYYY>.json`
    pub fn file_name(&self) -> String {
        export_file_name(self.export_date.date_naive())
    }

    pub fn to_json_pretty(&self) -> WealthResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WealthError::Export(e.to_string()))
    }
}

/// Conventional export file name for a given date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wealthwise::store::snapshot::export_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2025, 4, 7).unwrap();
/// assert_eq!(export_file_name(date), "budget-export-4-7-2025.json");
/// ```
pub fn export_file_name(date: NaiveDate) -> String {
    format!("budget-export-{}.json", date.format("%-m-%-d-%Y"))
}

/// A category as it appears in an import file
///
/// Has no `percentage`; it is recomputed from the amounts.
#[derive(Debug, Clone, Deserialize)]
struct ImportedCategory {
    name: String,
    allocated: Money,
    spent: Money,
    #[serde(default)]
    color: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImport {
    categories: Option<Vec<ImportedCategory>>,
    monthly_data: Option<Vec<MonthlySnapshot>>,
    budget_total: Option<Money>,
    budget_spent: Option<Money>,
}

/// A parsed and validated import, ready to be applied to a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotImport {
    pub categories: Option<Vec<BudgetCategory>>,
    pub monthly_data: Option<Vec<MonthlySnapshot>>,
    pub budget_total: Option<Money>,
    pub budget_spent: Option<Money>,
}

impl SnapshotImport {
    /// Parse and validate a JSON import payload
    ///
    /// Any syntax error, wrong type, duplicate category name or negative
    /// amount is reported as `WealthError::Parse`.
    pub fn parse(raw: &str) -> WealthResult<Self> {
        let raw: RawImport = serde_json::from_str(raw)
            .map_err(|e| WealthError::Parse(format!("Invalid budget snapshot: {}", e)))?;

        let categories = match raw.categories {
            Some(imported) => Some(convert_categories(imported)?),
            None => None,
        };

        if let Some(months) = &raw.monthly_data {
            for (i, month) in months.iter().enumerate() {
                if month.budget.is_negative() || month.spent.is_negative() {
                    return Err(WealthError::Parse(format!(
                        "monthlyData[{}] ({}) has a negative amount",
                        i, month.name
                    )));
                }
            }
        }

        for (key, value) in [
            ("budgetTotal", raw.budget_total),
            ("budgetSpent", raw.budget_spent),
        ] {
            if value.is_some_and(|v| v.is_negative()) {
                return Err(WealthError::Parse(format!("{} cannot be negative", key)));
            }
        }

        Ok(Self {
            categories,
            monthly_data: raw.monthly_data,
            budget_total: raw.budget_total,
            budget_spent: raw.budget_spent,
        })
    }

    /// True when the payload carried none of the importable keys
    pub fn is_empty(&self) -> bool {
        self.categories.is_none()
            && self.monthly_data.is_none()
            && self.budget_total.is_none()
            && self.budget_spent.is_none()
    }
}

fn convert_categories(imported: Vec<ImportedCategory>) -> WealthResult<Vec<BudgetCategory>> {
    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(imported.len());

    for (i, entry) in imported.into_iter().enumerate() {
        let category = BudgetCategory::with_spent(entry.name, entry.allocated, entry.spent)
            .styled(entry.color, entry.icon);

        category
            .validate()
            .map_err(|e| WealthError::Parse(format!("categories[{}]: {}", i, e)))?;

        if !seen.insert(category.name.clone()) {
            return Err(WealthError::Parse(format!(
                "categories[{}]: duplicate category name '{}'",
                i, category.name
            )));
        }

        categories.push(category);
    }

    Ok(categories)
}

/// What an import changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of categories now in the store, if they were replaced
    pub categories: Option<usize>,
    /// Number of months now in the history, if it was replaced
    pub months: Option<usize>,
    pub budget_total: bool,
    pub budget_spent: bool,
}

impl ImportSummary {
    pub fn changed_anything(&self) -> bool {
        self.categories.is_some() || self.months.is_some() || self.budget_total || self.budget_spent
    }
}
