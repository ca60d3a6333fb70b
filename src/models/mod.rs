//! Core data models for WealthWise
//!
//! This module contains the data structures of the budget domain:
//! categories, goals, alerts, monthly history and the `Money` amount type.

pub mod alert;
pub mod category;
pub mod goal;
pub mod ids;
pub mod monthly;
pub mod money;

pub use alert::{AlertSeverity, BudgetAlert};
pub use category::{BudgetCategory, CategoryValidationError};
pub use goal::{BudgetGoal, NewGoal};
pub use ids::{AlertId, GoalId};
pub use money::{Money, MoneyParseError};
pub use monthly::MonthlySnapshot;
