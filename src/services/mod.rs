//! Business logic layer
//!
//! Services sit between the CLI and storage: they load the store, apply a
//! change, persist it and write the audit trail.

pub mod budget;

pub use budget::{describe_import, BudgetService};
