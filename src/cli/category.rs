//! Category CLI commands

use clap::Subcommand;

use crate::display::{format_category_details, format_category_list};
use crate::error::WealthResult;
use crate::models::{BudgetCategory, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_amount;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their usage
    List,

    /// Show one category in detail
    Show {
        /// Category name
        name: String,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Amount allocated to the category (e.g. "500" or "500.00")
        #[arg(short, long, default_value = "0")]
        allocated: String,
        /// Color key used by front ends
        #[arg(long, default_value = "bg-gray-500")]
        color: String,
        /// Icon key used by front ends
        #[arg(long, default_value = "")]
        icon: String,
    },

    /// Change a category's allocation
    Allocate {
        /// Category name
        name: String,
        /// New allocated amount
        amount: String,
    },

    /// Record spending against a category
    Spend {
        /// Category name
        name: String,
        /// Amount spent
        amount: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> WealthResult<()> {
    let mut service = BudgetService::load(storage)?;
    let currency = storage.settings().currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(service.store().categories(), currency));
        }

        CategoryCommands::Show { name } => {
            let category = service.find_category(&name)?;
            print!("{}", format_category_details(category, currency));
        }

        CategoryCommands::Add {
            name,
            allocated,
            color,
            icon,
        } => {
            let allocated = parse_amount(&allocated, "allocation")?;
            let category = BudgetCategory::new(name, allocated).styled(color, icon);
            let created = service.add_category(category)?;

            println!("Created category: {}", created.name);
            println!("  Allocated: {}", created.allocated.format_with_symbol(currency));
            println!(
                "  Budget total: {}",
                service.store().budget_total().format_with_symbol(currency)
            );
        }

        CategoryCommands::Allocate { name, amount } => {
            let amount = parse_amount(&amount, "allocation")?;
            let updated = service.allocate(&name, amount)?;

            println!(
                "{} now has {} allocated ({}% used)",
                updated.name,
                updated.allocated.format_with_symbol(currency),
                updated.percentage
            );
        }

        CategoryCommands::Spend { name, amount } => {
            let amount: Money = parse_amount(&amount, "amount")?;
            let outcome = service.record_spend(&name, amount)?;

            println!(
                "Recorded {} in {} ({}% -> {}%)",
                amount.format_with_symbol(currency),
                name,
                outcome.previous_percentage,
                outcome.percentage
            );
            if let Some(alert) = outcome.alert {
                println!("Alert: {}", alert.message);
            }
        }
    }

    Ok(())
}
