//! CLI command handlers
//!
//! Bridges the clap argument parsing with the budget service. Handlers print
//! to stdout and return errors for `main` to report.

pub mod alert;
pub mod category;
pub mod goal;
pub mod month;
pub mod report;
pub mod snapshot;

pub use alert::{handle_alert_command, AlertCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use month::{handle_month_command, MonthCommands};
pub use report::{
    handle_income_command, handle_log_command, handle_overview_command, handle_recommend_command,
};
pub use snapshot::{handle_export_command, handle_import_command, FormatArg};

use crate::error::{WealthError, WealthResult};
use crate::models::Money;

/// Parse a user-typed amount such as `450`, `12.50` or `$1,200`
pub(crate) fn parse_amount(input: &str, what: &str) -> WealthResult<Money> {
    Money::parse(input)
        .map_err(|e| WealthError::Validation(format!("Invalid {} '{}': {}", what, input, e)))
}
