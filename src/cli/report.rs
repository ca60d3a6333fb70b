//! Overview, recommendation, income and audit-log commands

use std::path::Path;

use crate::error::{WealthError, WealthResult};
use crate::reports::{BudgetOverviewReport, BudgetRecommendation};
use crate::services::BudgetService;
use crate::storage::{write_text_atomic, Storage};

use super::parse_amount;

/// Print the budget overview, or write its category table as CSV
pub fn handle_overview_command(storage: &Storage, csv: Option<&Path>) -> WealthResult<()> {
    let service = BudgetService::load(storage)?;
    let report = BudgetOverviewReport::generate(service.store());

    match csv {
        Some(path) => {
            let mut buffer = Vec::new();
            report.export_csv(&mut buffer)?;
            let text = String::from_utf8(buffer)
                .map_err(|e| WealthError::Export(format!("CSV is not valid UTF-8: {}", e)))?;
            write_text_atomic(path, &text)?;
            println!("Overview written to {}", path.display());
        }
        None => {
            print!("{}", report.format_terminal(&storage.settings().currency_symbol));
            if !report.over_threshold.is_empty() {
                println!();
                println!(
                    "Above {}% of budget: {}",
                    service.store().alert_threshold(),
                    report.over_threshold.join(", ")
                );
            }
        }
    }

    Ok(())
}

/// Print an allocation recommendation for the current income
pub fn handle_recommend_command(storage: &Storage) -> WealthResult<()> {
    let service = BudgetService::load(storage)?;
    let recommendation = BudgetRecommendation::generate(service.store())?;
    print!(
        "{}",
        recommendation.format_terminal(&storage.settings().currency_symbol)
    );
    Ok(())
}

/// Show or change the monthly income and savings rate
pub fn handle_income_command(
    storage: &Storage,
    amount: Option<String>,
    savings_rate: Option<u8>,
) -> WealthResult<()> {
    let mut service = BudgetService::load(storage)?;
    let currency = storage.settings().currency_symbol.as_str();

    if amount.is_some() || savings_rate.is_some() {
        let amount = amount
            .map(|a| parse_amount(&a, "income"))
            .transpose()?;
        service.set_income(amount, savings_rate)?;
    }

    let store = service.store();
    println!("Income:       {}", store.income().format_with_symbol(currency));
    println!("Savings rate: {}%", store.savings_rate());
    Ok(())
}

/// Print the most recent audit entries
pub fn handle_log_command(storage: &Storage, count: usize) -> WealthResult<()> {
    let entries = storage.audit().read_recent(count)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_line());
    }
    Ok(())
}
