//! Goal display formatting

use crate::models::BudgetGoal;

use super::report::{column_width, format_bar};

/// Format goals with progress bars
pub fn format_goal_list(goals: &[BudgetGoal], currency: &str) -> String {
    if goals.is_empty() {
        return "No goals yet.\n\nRun 'wealthwise goal add' to create one.".to_string();
    }

    let name_width = column_width(goals.iter().map(|g| g.name.as_str()), 4);
    let mut output = String::new();

    for goal in goals {
        let deadline = if goal.deadline.is_empty() {
            String::new()
        } else {
            format!("  by {}", goal.deadline)
        };
        output.push_str(&format!(
            "{:>4}  {:<width$}  {} / {}  {} {:>3}%{}\n",
            goal.id.to_string(),
            goal.name,
            goal.current.format_with_symbol(currency),
            goal.target.format_with_symbol(currency),
            format_bar(goal.percentage, 100, 20),
            goal.percentage,
            deadline,
            width = name_width
        ));
    }

    output
}

/// Format a single goal in detail
pub fn format_goal_details(goal: &BudgetGoal, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Goal:     {} (#{})\n", goal.name, goal.id));
    output.push_str(&format!(
        "Progress: {} of {} ({}%)\n",
        goal.current.format_with_symbol(currency),
        goal.target.format_with_symbol(currency),
        goal.percentage
    ));
    if goal.is_reached() {
        output.push_str("Status:   reached\n");
    } else {
        output.push_str(&format!(
            "Needed:   {}\n",
            goal.shortfall().format_with_symbol(currency)
        ));
    }
    if !goal.deadline.is_empty() {
        output.push_str(&format!("Deadline: {}\n", goal.deadline));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalId, Money, NewGoal};

    fn goal(current: i64, target: i64) -> BudgetGoal {
        BudgetGoal::from_draft(
            GoalId::new(3),
            NewGoal::new("New Car", Money::from_units(current), Money::from_units(target))
                .with_deadline("Dec 2025"),
        )
    }

    #[test]
    fn test_goal_list() {
        let text = format_goal_list(&[goal(12_000, 35_000)], "$");
        assert!(text.contains("$12000.00 / $35000.00"));
        assert!(text.contains("34%"));
        assert!(text.trim_end().ends_with("by Dec 2025"));
    }

    #[test]
    fn test_goal_details() {
        let text = format_goal_details(&goal(12_000, 35_000), "$");
        assert!(text.contains("Needed:   $23000.00"));

        let text = format_goal_details(&goal(35_000, 35_000), "$");
        assert!(text.contains("Status:   reached"));
    }
}
