//! Monthly history points for the budget-vs-spent chart

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One historical data point: what was budgeted and spent in a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Month label, e.g. "Apr"
    pub name: String,
    pub budget: Money,
    pub spent: Money,
}

impl MonthlySnapshot {
    pub fn new(name: impl Into<String>, budget: Money, spent: Money) -> Self {
        Self {
            name: name.into(),
            budget,
            spent,
        }
    }

    /// Budget left unspent in this month (negative when overspent)
    pub fn variance(&self) -> Money {
        self.budget - self.spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variance() {
        let month = MonthlySnapshot::new("Mar", Money::from_units(5000), Money::from_units(4600));
        assert_eq!(month.variance(), Money::from_units(400));
    }
}
