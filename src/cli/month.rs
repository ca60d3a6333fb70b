//! Monthly history CLI commands

use clap::Subcommand;

use crate::display::format_month_list;
use crate::error::WealthResult;
use crate::models::MonthlySnapshot;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_amount;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// Show the budget-vs-spent history
    List,

    /// Append a month to the history
    Add {
        /// Month label, e.g. "Jul"
        name: String,
        /// Amount budgeted that month
        budget: String,
        /// Amount spent that month
        #[arg(default_value = "0")]
        spent: String,
    },

    /// Set the label of the month being budgeted
    #[command(name = "set-current")]
    SetCurrent {
        /// Month label, e.g. "May 2025"
        label: String,
    },
}

/// Handle a month command
pub fn handle_month_command(storage: &Storage, cmd: MonthCommands) -> WealthResult<()> {
    let mut service = BudgetService::load(storage)?;
    let currency = storage.settings().currency_symbol.as_str();

    match cmd {
        MonthCommands::List => {
            print!("{}", format_month_list(service.store().monthly_data(), currency));
        }

        MonthCommands::Add {
            name,
            budget,
            spent,
        } => {
            let month = MonthlySnapshot::new(
                name,
                parse_amount(&budget, "budget")?,
                parse_amount(&spent, "spent amount")?,
            );
            service.record_month(month.clone())?;
            println!(
                "Recorded {}: budget {}, spent {}",
                month.name,
                month.budget.format_with_symbol(currency),
                month.spent.format_with_symbol(currency)
            );
        }

        MonthCommands::SetCurrent { label } => {
            service.set_current_month(&label)?;
            println!("Current month set to {}", label);
        }
    }

    Ok(())
}
