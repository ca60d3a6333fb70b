//! Budget category model
//!
//! A category is a named spending bucket with a monthly allocation and the
//! amount spent against it in the current period. The `percentage` field is
//! derived and is refreshed by every mutating method on the type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Longest accepted category name
pub const MAX_NAME_LEN: usize = 50;

/// One spending bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    /// Unique name, also used as the display label
    pub name: String,

    /// Monthly budget ceiling
    pub allocated: Money,

    /// Amount recorded against this category in the current period
    pub spent: Money,

    /// round(spent / allocated * 100), 0 when nothing is allocated
    #[serde(default)]
    pub percentage: i64,

    /// Presentation color key (e.g. "bg-blue-500")
    #[serde(default)]
    pub color: String,

    /// Symbolic icon key (e.g. "home"), resolved by the presentation layer
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
}

impl BudgetCategory {
    /// Create a category with nothing spent yet
    pub fn new(name: impl Into<String>, allocated: Money) -> Self {
        Self::with_spent(name, allocated, Money::zero())
    }

    /// Create a category with an existing spent amount
    pub fn with_spent(name: impl Into<String>, allocated: Money, spent: Money) -> Self {
        let mut category = Self {
            name: name.into(),
            allocated,
            spent,
            percentage: 0,
            color: String::new(),
            icon: String::new(),
        };
        category.refresh_percentage();
        category
    }

    /// Set the presentation keys
    pub fn styled(mut self, color: impl Into<String>, icon: impl Into<String>) -> Self {
        self.color = color.into();
        self.icon = icon.into();
        self
    }

    /// Recompute `percentage` from `spent` and `allocated`
    pub fn refresh_percentage(&mut self) {
        self.percentage = self.spent.percent_of(self.allocated);
    }

    /// Change the allocation and refresh the derived percentage
    pub fn set_allocated(&mut self, allocated: Money) {
        self.allocated = allocated;
        self.refresh_percentage();
    }

    /// Add to the spent amount and refresh the derived percentage
    pub fn add_spent(&mut self, amount: Money) {
        self.spent += amount;
        self.refresh_percentage();
    }

    /// Allocation left over (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.allocated - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.allocated
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(
                self.name.chars().count(),
            ));
        }

        if self.allocated.is_negative() {
            return Err(CategoryValidationError::NegativeAllocation);
        }

        if self.spent.is_negative() {
            return Err(CategoryValidationError::NegativeSpent);
        }

        if !self.allocated.is_in_range() || !self.spent.is_in_range() {
            return Err(CategoryValidationError::AmountTooLarge);
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAllocation,
    NegativeSpent,
    AmountTooLarge,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::NegativeAllocation => write!(f, "Allocated amount cannot be negative"),
            Self::NegativeSpent => write!(f, "Spent amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Amounts cannot exceed {}", Money::MAX),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
