//! Demo content for a fresh budget

use crate::models::{AlertSeverity, BudgetCategory, Money, MonthlySnapshot, NewGoal};

use super::BudgetStore;

const CATEGORIES: &[(&str, i64, i64, &str, &str)] = &[
    ("Housing", 1500, 1500, "bg-blue-500", "home"),
    ("Groceries", 600, 450, "bg-green-500", "shopping-cart"),
    ("Dining Out", 400, 380, "bg-yellow-500", "utensils"),
    ("Transportation", 300, 220, "bg-purple-500", "car"),
    ("Travel", 200, 0, "bg-indigo-500", "plane"),
    ("Health", 150, 75, "bg-red-500", "heart"),
];

const GOALS: &[(&str, i64, i64, &str, &str, &str)] = &[
    ("Down Payment for House", 45_000, 60_000, "Mar 2026", "bg-blue-600", "home"),
    ("Education Fund", 28_000, 50_000, "Aug 2027", "bg-purple-600", "graduation-cap"),
    ("New Car", 12_000, 35_000, "Dec 2025", "bg-green-600", "car"),
    ("Emergency Fund", 15_000, 25_000, "Jun 2025", "bg-yellow-600", "shield"),
];

const ALERTS: &[(&str, AlertSeverity)] = &[
    ("Dining Out category is at 95% of budget", AlertSeverity::Warning),
    ("Housing expenses paid for this month", AlertSeverity::Info),
    ("You've saved $350 in Transportation this month", AlertSeverity::Success),
    ("Subscription renewal coming up in 3 days", AlertSeverity::Info),
];

const MONTHS: &[(&str, i64, i64)] = &[
    ("Jan", 4800, 4200),
    ("Feb", 4800, 3800),
    ("Mar", 5000, 4600),
    ("Apr", 5000, 3200),
    ("May", 5200, 0),
    ("Jun", 5200, 0),
];

impl BudgetStore {
    /// A store pre-filled with the demo budget shown to new users
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();

        store.categories = CATEGORIES
            .iter()
            .map(|&(name, allocated, spent, color, icon)| {
                BudgetCategory::with_spent(name, Money::from_units(allocated), Money::from_units(spent))
                    .styled(color, icon)
            })
            .collect();

        for &(name, current, target, deadline, color, icon) in GOALS {
            let draft = NewGoal::new(name, Money::from_units(current), Money::from_units(target))
                .with_deadline(deadline)
                .styled(color, icon);
            store.push_goal(draft);
        }

        for &(message, severity) in ALERTS {
            store.raise_alert(message, severity);
        }

        store.monthly_data = MONTHS
            .iter()
            .map(|&(name, budget, spent)| {
                MonthlySnapshot::new(name, Money::from_units(budget), Money::from_units(spent))
            })
            .collect();

        // The overview scalars are tracked separately from the categories
        store.budget_total = Money::from_units(5000);
        store.budget_spent = Money::from_units(3200);
        store.income = Money::from_units(6500);
        store.savings_rate = 20;
        store.current_month = "April 2025".to_string();

        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalId;

    #[test]
    fn test_demo_data_shape() {
        let store = BudgetStore::with_demo_data();
        assert_eq!(store.categories().len(), 6);
        assert_eq!(store.goals().len(), 4);
        assert_eq!(store.alerts().len(), 4);
        assert_eq!(store.monthly_data().len(), 6);
        assert_eq!(store.percent_spent(), 64);
        assert_eq!(store.budget_remaining(), Money::from_units(1800));
    }

    #[test]
    fn test_demo_percentages() {
        let store = BudgetStore::with_demo_data();
        let expected = [100, 75, 95, 73, 0, 50];
        for (category, pct) in store.categories().iter().zip(expected) {
            assert_eq!(category.percentage, pct, "{}", category.name);
        }
        assert_eq!(store.goal(GoalId::new(3)).unwrap().percentage, 34);
    }

    #[test]
    fn test_demo_next_goal_id() {
        let mut store = BudgetStore::with_demo_data();
        let id = store
            .add_goal(NewGoal::new("Boat", Money::zero(), Money::from_units(9000)))
            .unwrap();
        assert_eq!(id, GoalId::new(5));
    }

    #[test]
    fn test_demo_dining_out_scenario() {
        let mut store = BudgetStore::with_demo_data();
        let alerts_before = store.alerts().len();

        store.record_spend("Dining Out", Money::from_units(20)).unwrap();

        let dining = store.category("Dining Out").unwrap();
        assert_eq!(dining.spent, Money::from_units(400));
        assert_eq!(dining.percentage, 100);
        assert_eq!(store.alerts().len(), alerts_before);
    }
}
