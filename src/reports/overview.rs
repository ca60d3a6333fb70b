//! Budget Overview Report
//!
//! Shows every category with its allocation, spending, what remains and the
//! percentage used, followed by the overview totals.

use serde::Serialize;
use std::io::Write;

use crate::error::{WealthError, WealthResult};
use crate::models::Money;
use crate::store::{BudgetOverview, BudgetStore};

/// A row in the overview report for a single category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReportRow {
    pub name: String,
    pub allocated: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percentage: i64,
}

impl CategoryReportRow {
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    pub overview: BudgetOverview,
    pub rows: Vec<CategoryReportRow>,
    /// Sum of category allocations
    pub total_allocated: Money,
    /// Sum of category spending
    pub total_spent: Money,
    /// Categories above the alert threshold
    pub over_threshold: Vec<String>,
}

impl BudgetOverviewReport {
    /// Generate the report from the current store
    pub fn generate(store: &BudgetStore) -> Self {
        let rows: Vec<CategoryReportRow> = store
            .categories()
            .iter()
            .map(|c| CategoryReportRow {
                name: c.name.clone(),
                allocated: c.allocated,
                spent: c.spent,
                remaining: c.remaining(),
                percentage: c.percentage,
            })
            .collect();

        let over_threshold = rows
            .iter()
            .filter(|r| r.percentage > store.alert_threshold())
            .map(|r| r.name.clone())
            .collect();

        Self {
            overview: store.overview(),
            total_allocated: rows.iter().map(|r| r.allocated).sum(),
            total_spent: rows.iter().map(|r| r.spent).sum(),
            rows,
            over_threshold,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(currency);
        let mut output = String::new();

        let title = if self.overview.current_month.is_empty() {
            "Budget Overview".to_string()
        } else {
            format!("Budget Overview - {}", self.overview.current_month)
        };
        output.push_str(&title);
        output.push('\n');
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str(&format!(
            "Budget: {}   Spent: {} ({}%)   Remaining: {}\n",
            fmt(self.overview.budget_total),
            fmt(self.overview.budget_spent),
            self.overview.percent_spent,
            fmt(self.overview.budget_remaining),
        ));
        output.push_str(&format!(
            "Income: {}   Savings rate: {}%\n\n",
            fmt(self.overview.income),
            self.overview.savings_rate
        ));

        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12} {:>6}\n",
            "Category", "Allocated", "Spent", "Remaining", "Used"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.is_overspent() { " *" } else { "" };
            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>12} {:>5}%{}\n",
                row.name,
                fmt(row.allocated),
                fmt(row.spent),
                fmt(row.remaining),
                row.percentage,
                marker
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12}\n",
            "TOTAL",
            fmt(self.total_allocated),
            fmt(self.total_spent),
            fmt(self.total_allocated - self.total_spent),
        ));

        if self.rows.iter().any(|r| r.is_overspent()) {
            output.push_str("\n* = Overspent\n");
        }

        output
    }

    /// Export the category rows as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> WealthResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Category", "Allocated", "Spent", "Remaining", "Percentage"])
            .map_err(|e| WealthError::Export(e.to_string()))?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.name.clone(),
                    format!("{:.2}", row.allocated.as_units_f64()),
                    format!("{:.2}", row.spent.as_units_f64()),
                    format!("{:.2}", row.remaining.as_units_f64()),
                    row.percentage.to_string(),
                ])
                .map_err(|e| WealthError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| WealthError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_demo() {
        let report = BudgetOverviewReport::generate(&BudgetStore::with_demo_data());

        assert_eq!(report.rows.len(), 6);
        assert_eq!(report.total_allocated, Money::from_units(3150));
        assert_eq!(report.total_spent, Money::from_units(2625));
        assert_eq!(report.over_threshold, vec!["Housing", "Dining Out"]);
        assert!(!report.rows.iter().any(|r| r.is_overspent()));
    }

    #[test]
    fn test_format_terminal_marks_overspent() {
        let mut store = BudgetStore::with_demo_data();
        store.record_spend("Health", Money::from_units(100)).unwrap();

        let text = BudgetOverviewReport::generate(&store).format_terminal("$");
        assert!(text.starts_with("Budget Overview - April 2025"));
        assert!(text.contains("117%"));
        assert!(text.contains("* = Overspent"));
    }

    #[test]
    fn test_export_csv() {
        let report = BudgetOverviewReport::generate(&BudgetStore::with_demo_data());
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Category,Allocated,Spent,Remaining,Percentage")
        );
        assert_eq!(lines.next(), Some("Housing,1500.00,1500.00,0.00,100"));
        assert_eq!(text.lines().count(), 7);
    }
}
