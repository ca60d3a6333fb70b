//! Goal CLI commands

use clap::Subcommand;

use crate::display::{format_goal_details, format_goal_list};
use crate::error::{WealthError, WealthResult};
use crate::models::{GoalId, NewGoal};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_amount;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List all goals with progress
    List,

    /// Create a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Amount to reach
        #[arg(short, long)]
        target: String,
        /// Amount already saved
        #[arg(short, long, default_value = "0")]
        current: String,
        /// Deadline label, e.g. "Mar 2026"
        #[arg(short, long, default_value = "")]
        deadline: String,
        /// Color key used by front ends
        #[arg(long, default_value = "bg-blue-600")]
        color: String,
        /// Icon key used by front ends
        #[arg(long, default_value = "target")]
        icon: String,
    },

    /// Update a goal's progress
    Update {
        /// Goal id (e.g. "3" or "goal-3")
        id: String,
        /// New saved amount
        #[arg(short, long)]
        current: Option<String>,
        /// New target amount
        #[arg(short, long)]
        target: Option<String>,
    },
}

fn parse_goal_id(input: &str) -> WealthResult<GoalId> {
    input
        .parse()
        .map_err(|_| WealthError::Validation(format!("Invalid goal id '{}'", input)))
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> WealthResult<()> {
    let mut service = BudgetService::load(storage)?;
    let currency = storage.settings().currency_symbol.as_str();

    match cmd {
        GoalCommands::List => {
            print!("{}", format_goal_list(service.store().goals(), currency));
        }

        GoalCommands::Add {
            name,
            target,
            current,
            deadline,
            color,
            icon,
        } => {
            let draft = NewGoal::new(
                name,
                parse_amount(&current, "current amount")?,
                parse_amount(&target, "target")?,
            )
            .with_deadline(deadline)
            .styled(color, icon);

            let goal = service.add_goal(draft)?;
            println!("Created goal #{}", goal.id);
            print!("{}", format_goal_details(&goal, currency));
        }

        GoalCommands::Update {
            id,
            current,
            target,
        } => {
            if current.is_none() && target.is_none() {
                println!("No changes specified. Use --current or --target.");
                return Ok(());
            }

            let id = parse_goal_id(&id)?;
            let existing = service
                .store()
                .goal(id)
                .ok_or_else(|| WealthError::goal_not_found(id.value()))?;

            let current = match current {
                Some(s) => parse_amount(&s, "current amount")?,
                None => existing.current,
            };
            let target = match target {
                Some(s) => parse_amount(&s, "target")?,
                None => existing.target,
            };

            let goal = service.update_goal(id, current, target)?;
            println!("Updated goal #{}", goal.id);
            print!("{}", format_goal_details(&goal, currency));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_goal_id() {
        assert_eq!(parse_goal_id("goal-2").unwrap(), GoalId::new(2));
        assert!(parse_goal_id("two").unwrap_err().is_validation());
    }
}
