//! Audit logging for WealthWise
//!
//! Every mutation made through [`crate::services::BudgetService`] is recorded
//! as one JSON line in `audit.log`, with before/after values where they exist.
//!
//! - `AuditEntry`: timestamp, operation, entity, optional before/after values
//!   and a short summary.
//! - `AuditLogger`: appends entries to the log and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
