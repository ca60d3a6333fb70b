//! Alert CLI commands

use clap::Subcommand;

use crate::display::format_alert_list;
use crate::error::{WealthError, WealthResult};
use crate::models::AlertId;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Alert subcommands
#[derive(Subcommand)]
pub enum AlertCommands {
    /// List active alerts
    List,

    /// Dismiss an alert
    Dismiss {
        /// Alert id (e.g. "2" or "alert-2")
        id: String,
    },
}

/// Handle an alert command
pub fn handle_alert_command(storage: &Storage, cmd: AlertCommands) -> WealthResult<()> {
    let mut service = BudgetService::load(storage)?;

    match cmd {
        AlertCommands::List => {
            println!("{}", format_alert_list(service.store().alerts()).trim_end());
        }

        AlertCommands::Dismiss { id } => {
            let id: AlertId = id
                .parse()
                .map_err(|_| WealthError::Validation(format!("Invalid alert id '{}'", id)))?;

            match service.dismiss_alert(id)? {
                Some(alert) => println!("Dismissed alert #{}: {}", alert.id, alert.message),
                None => println!("No alert #{}; nothing to dismiss.", id),
            }
        }
    }

    Ok(())
}
