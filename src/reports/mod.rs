//! Reports for WealthWise
//!
//! The budget overview and the allocation recommender.

pub mod overview;
pub mod recommend;

pub use overview::{BudgetOverviewReport, CategoryReportRow};
pub use recommend::{BudgetModel, BudgetRecommendation, Bucket, RecommendationLine};
