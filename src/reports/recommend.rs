//! Budget recommendations
//!
//! Picks one of three allocation models from the user's income and current
//! category spending, then turns the model's percentages into amounts.

use serde::Serialize;
use std::fmt;

use crate::error::{WealthError, WealthResult};
use crate::models::{BudgetCategory, Money};
use crate::store::BudgetStore;

/// Spending buckets the allocation models are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Housing,
    Food,
    Transportation,
    Utilities,
    Healthcare,
    Savings,
    Personal,
    Entertainment,
}

impl Bucket {
    pub const ALL: [Bucket; 8] = [
        Bucket::Housing,
        Bucket::Food,
        Bucket::Transportation,
        Bucket::Utilities,
        Bucket::Healthcare,
        Bucket::Savings,
        Bucket::Personal,
        Bucket::Entertainment,
    ];

    /// Classify a category by keywords in its name; anything unrecognised
    /// counts as personal spending
    pub fn for_category(name: &str) -> Self {
        let name = name.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| name.contains(w));

        // Healthcare first: "healthcare" contains "car"
        if has(&["health", "medical", "doctor", "pharma", "dental"]) {
            Bucket::Healthcare
        } else if has(&["hous", "rent", "mortgage", "home"]) {
            Bucket::Housing
        } else if has(&["groc", "food", "dining", "restaurant", "meal"]) {
            Bucket::Food
        } else if has(&["transport", "car", "fuel", "gas", "transit", "commute"]) {
            Bucket::Transportation
        } else if has(&["utilit", "electric", "water", "internet", "phone"]) {
            Bucket::Utilities
        } else if has(&["saving", "invest", "emergency", "retire"]) {
            Bucket::Savings
        } else if has(&["entertain", "travel", "movie", "stream", "hobby", "fun"]) {
            Bucket::Entertainment
        } else {
            Bucket::Personal
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bucket::Housing => "Housing",
            Bucket::Food => "Food",
            Bucket::Transportation => "Transportation",
            Bucket::Utilities => "Utilities",
            Bucket::Healthcare => "Healthcare",
            Bucket::Savings => "Savings",
            Bucket::Personal => "Personal",
            Bucket::Entertainment => "Entertainment",
        };
        write!(f, "{}", label)
    }
}

/// Allocation model, from most to least saving-oriented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetModel {
    Conservative,
    Moderate,
    Aggressive,
}

impl BudgetModel {
    /// Percentage of income recommended for a bucket
    pub fn percent_for(&self, bucket: Bucket) -> i64 {
        use Bucket::*;
        match (self, bucket) {
            (BudgetModel::Conservative, Housing) => 30,
            (BudgetModel::Conservative, Food) => 15,
            (BudgetModel::Conservative, Transportation) => 10,
            (BudgetModel::Conservative, Utilities) => 10,
            (BudgetModel::Conservative, Healthcare) => 10,
            (BudgetModel::Conservative, Savings) => 15,
            (BudgetModel::Conservative, Personal) => 5,
            (BudgetModel::Conservative, Entertainment) => 5,

            (BudgetModel::Moderate, Housing) => 35,
            (BudgetModel::Moderate, Food) => 15,
            (BudgetModel::Moderate, Transportation) => 15,
            (BudgetModel::Moderate, Utilities) => 10,
            (BudgetModel::Moderate, Healthcare) => 5,
            (BudgetModel::Moderate, Savings) => 10,
            (BudgetModel::Moderate, Personal) => 5,
            (BudgetModel::Moderate, Entertainment) => 5,

            (BudgetModel::Aggressive, Housing) => 40,
            (BudgetModel::Aggressive, Food) => 20,
            (BudgetModel::Aggressive, Transportation) => 15,
            (BudgetModel::Aggressive, Utilities) => 10,
            (BudgetModel::Aggressive, Healthcare) => 5,
            (BudgetModel::Aggressive, Savings) => 5,
            (BudgetModel::Aggressive, Personal) => 2,
            (BudgetModel::Aggressive, Entertainment) => 3,
        }
    }

    /// Choose a model from income, total spending and housing spending.
    ///
    /// Conservative needs a savings rate of at least 15% with housing at
    /// most 30% of income; moderate needs 5% and 35%.
    pub fn select(income: Money, total_spent: Money, housing: Money) -> Self {
        let saved = income - total_spent;
        if at_least_percent(saved, income, 15) && at_most_percent(housing, income, 30) {
            BudgetModel::Conservative
        } else if at_least_percent(saved, income, 5) && at_most_percent(housing, income, 35) {
            BudgetModel::Moderate
        } else {
            BudgetModel::Aggressive
        }
    }
}

impl fmt::Display for BudgetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetModel::Conservative => write!(f, "conservative"),
            BudgetModel::Moderate => write!(f, "moderate"),
            BudgetModel::Aggressive => write!(f, "aggressive"),
        }
    }
}

// part / whole * 100 >= pct, without rounding
fn at_least_percent(part: Money, whole: Money, pct: i64) -> bool {
    i128::from(part.cents()) * 100 >= i128::from(whole.cents()) * i128::from(pct)
}

fn at_most_percent(part: Money, whole: Money, pct: i64) -> bool {
    i128::from(part.cents()) * 100 <= i128::from(whole.cents()) * i128::from(pct)
}

/// One bucket of a recommendation
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationLine {
    pub bucket: Bucket,
    pub percent: i64,
    pub current: Money,
    pub recommended: Money,
    /// Category names counted in `current`
    pub categories: Vec<String>,
}

/// A full recommendation for the current budget
#[derive(Debug, Clone, Serialize)]
pub struct BudgetRecommendation {
    pub model: BudgetModel,
    pub income: Money,
    pub lines: Vec<RecommendationLine>,
    pub current_total: Money,
    pub recommended_total: Money,
    /// How much current spending exceeds the recommendation, never negative
    pub savings_opportunity: Money,
}

impl BudgetRecommendation {
    /// Build a recommendation from the store's income and categories
    pub fn generate(store: &BudgetStore) -> WealthResult<Self> {
        Self::from_categories(store.income(), store.categories())
    }

    pub fn from_categories(income: Money, categories: &[BudgetCategory]) -> WealthResult<Self> {
        if !income.is_positive() {
            return Err(WealthError::Validation(
                "Set a monthly income before asking for a recommendation".into(),
            ));
        }

        let mut lines: Vec<RecommendationLine> = Bucket::ALL
            .iter()
            .map(|&bucket| RecommendationLine {
                bucket,
                percent: 0,
                current: Money::zero(),
                recommended: Money::zero(),
                categories: Vec::new(),
            })
            .collect();

        for category in categories {
            let bucket = Bucket::for_category(&category.name);
            if let Some(line) = lines.iter_mut().find(|l| l.bucket == bucket) {
                line.current += category.spent;
                line.categories.push(category.name.clone());
            }
        }

        let current_total: Money = lines.iter().map(|l| l.current).sum();
        let housing = lines
            .iter()
            .find(|l| l.bucket == Bucket::Housing)
            .map(|l| l.current)
            .unwrap_or_default();

        let model = BudgetModel::select(income, current_total, housing);

        for line in &mut lines {
            line.percent = model.percent_for(line.bucket);
            line.recommended = whole_units_of(income, line.percent);
        }

        let recommended_total: Money = lines.iter().map(|l| l.recommended).sum();
        let gap = current_total - recommended_total;

        Ok(Self {
            model,
            income,
            lines,
            current_total,
            recommended_total,
            savings_opportunity: if gap.is_positive() { gap } else { Money::zero() },
        })
    }

    /// Format the recommendation for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(currency);
        let mut output = String::new();

        output.push_str(&format!(
            "Recommended model: {} (income {})\n",
            self.model,
            fmt(self.income)
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>5} {:>16} {:>16}\n",
            "Bucket", "Pct", "Current", "Recommended"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for line in &self.lines {
            output.push_str(&format!(
                "{:<16} {:>4}% {:>16} {:>16}\n",
                line.bucket.to_string(),
                line.percent,
                fmt(line.current),
                fmt(line.recommended)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>5} {:>16} {:>16}\n",
            "TOTAL",
            "",
            fmt(self.current_total),
            fmt(self.recommended_total)
        ));

        if self.savings_opportunity.is_positive() {
            output.push_str(&format!(
                "\nPotential monthly savings: {}\n",
                fmt(self.savings_opportunity)
            ));
        } else {
            output.push_str("\nSpending is within the recommended allocation.\n");
        }

        output
    }
}

/// `income * percent / 100`, rounded half-up to whole currency units
fn whole_units_of(income: Money, percent: i64) -> Money {
    let scaled = i128::from(income.cents()) * i128::from(percent);
    let units = (scaled + 5_000).div_euclid(10_000);
    Money::from_units(i64::try_from(units).unwrap_or(i64::MAX / 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spending(items: &[(&str, i64)]) -> Vec<BudgetCategory> {
        items
            .iter()
            .map(|&(name, spent)| {
                BudgetCategory::with_spent(name, Money::from_units(spent), Money::from_units(spent))
            })
            .collect()
    }

    #[test]
    fn test_bucket_keywords() {
        assert_eq!(Bucket::for_category("Housing"), Bucket::Housing);
        assert_eq!(Bucket::for_category("Dining Out"), Bucket::Food);
        assert_eq!(Bucket::for_category("Healthcare"), Bucket::Healthcare);
        assert_eq!(Bucket::for_category("Car Payment"), Bucket::Transportation);
        assert_eq!(Bucket::for_category("Travel"), Bucket::Entertainment);
        assert_eq!(Bucket::for_category("Emergency Fund"), Bucket::Savings);
        assert_eq!(Bucket::for_category("Gifts"), Bucket::Personal);
    }

    #[test]
    fn test_demo_budget_is_conservative() {
        let rec = BudgetRecommendation::generate(&BudgetStore::with_demo_data()).unwrap();

        assert_eq!(rec.model, BudgetModel::Conservative);
        assert_eq!(rec.current_total, Money::from_units(2625));
        assert_eq!(rec.recommended_total, Money::from_units(6500));
        assert_eq!(rec.savings_opportunity, Money::zero());

        let housing = &rec.lines[0];
        assert_eq!(housing.bucket, Bucket::Housing);
        assert_eq!(housing.recommended, Money::from_units(1950));
        assert_eq!(housing.current, Money::from_units(1500));
    }

    #[test]
    fn test_expensive_housing_is_moderate() {
        let categories = spending(&[("Rent", 1600), ("Groceries", 1400), ("Fun", 1000)]);
        let rec = BudgetRecommendation::from_categories(Money::from_units(5000), &categories).unwrap();

        assert_eq!(rec.model, BudgetModel::Moderate);
        assert_eq!(rec.lines[0].recommended, Money::from_units(1750));
    }

    #[test]
    fn test_overspending_is_aggressive_with_opportunity() {
        let categories = spending(&[
            ("Housing", 1750),
            ("Food", 800),
            ("Transportation", 600),
            ("Utilities", 400),
            ("Healthcare", 300),
            ("Savings", 650),
            ("Personal", 300),
            ("Entertainment", 200),
        ]);
        let rec = BudgetRecommendation::from_categories(Money::from_units(4000), &categories).unwrap();

        assert_eq!(rec.model, BudgetModel::Aggressive);
        assert_eq!(rec.recommended_total, Money::from_units(4000));
        assert_eq!(rec.savings_opportunity, Money::from_units(1000));
        assert!(rec.format_terminal("$").contains("Potential monthly savings: $1000.00"));
    }

    #[test]
    fn test_exact_thresholds_are_inclusive() {
        // 15% saved and housing at exactly 30%
        let model = BudgetModel::select(
            Money::from_units(1000),
            Money::from_units(850),
            Money::from_units(300),
        );
        assert_eq!(model, BudgetModel::Conservative);
    }

    #[test]
    fn test_requires_income() {
        let err = BudgetRecommendation::generate(&BudgetStore::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(whole_units_of(Money::from_cents(333_350), 3), Money::from_units(100));
        assert_eq!(whole_units_of(Money::from_units(1250), 2), Money::from_units(25));
    }
}
