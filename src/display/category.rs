//! Category display formatting

use crate::models::BudgetCategory;

use super::report::{column_width, format_bar};

/// Format categories as a table with a usage bar
pub fn format_category_list(categories: &[BudgetCategory], currency: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'wealthwise category add' to create one.".to_string();
    }

    let name_width = column_width(categories.iter().map(|c| c.name.as_str()), 8);
    let mut output = String::new();

    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>5}\n",
        "Category",
        "Allocated",
        "Spent",
        "Used",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>4}%  {}{}\n",
            category.name,
            category.allocated.format_with_symbol(currency),
            category.spent.format_with_symbol(currency),
            category.percentage,
            format_bar(category.percentage, 100, 10),
            if category.is_over_budget() { " OVER" } else { "" },
            width = name_width
        ));
    }

    output
}

/// Format a single category in detail
pub fn format_category_details(category: &BudgetCategory, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Category:  {}\n", category.name));
    output.push_str(&format!(
        "Allocated: {}\n",
        category.allocated.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Spent:     {} ({}%)\n",
        category.spent.format_with_symbol(currency),
        category.percentage
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        category.remaining().format_with_symbol(currency)
    ));
    if !category.icon.is_empty() {
        output.push_str(&format!("Icon:      {}\n", category.icon));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_list() {
        assert!(format_category_list(&[], "$").starts_with("No categories found."));
    }

    #[test]
    fn test_list_flags_over_budget() {
        let categories = vec![
            BudgetCategory::with_spent("Rent", Money::from_units(1000), Money::from_units(500)),
            BudgetCategory::with_spent("Fun", Money::from_units(100), Money::from_units(150)),
        ];
        let text = format_category_list(&categories, "€");

        assert!(text.contains("€1000.00"));
        assert!(text.contains("50%"));
        assert!(text.lines().nth(2).unwrap().ends_with("OVER"));
        assert!(!text.lines().nth(1).unwrap().ends_with("OVER"));
    }

    #[test]
    fn test_details() {
        let category = BudgetCategory::with_spent("Groceries", Money::from_units(600), Money::from_units(450))
            .styled("bg-green-500", "shopping-cart");
        let text = format_category_details(&category, "$");

        assert!(text.contains("Remaining: $150.00"));
        assert!(text.contains("(75%)"));
        assert!(text.contains("shopping-cart"));
    }
}
