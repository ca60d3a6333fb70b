//! WealthWise - personal budget state store
//!
//! This library holds the budget state behind the WealthWise dashboard:
//! spending categories, savings goals, alerts, monthly history and the
//! overview aggregates, with JSON snapshot import and export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, categories, goals, alerts, months)
//! - `store`: The in-memory `BudgetStore` and its snapshot format
//! - `config`: Configuration and path management
//! - `storage`: Persistence of the store as a JSON document
//! - `audit`: Audit logging system
//! - `services`: Business logic layer used by the CLI
//! - `export`: Snapshot rendering (JSON, YAML)
//! - `reports`: Budget overview and allocation recommendations
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use wealthwise::models::Money;
//! use wealthwise::store::BudgetStore;
//!
//! let mut store = BudgetStore::with_demo_data();
//! let outcome = store.record_spend("Health", Money::from_units(100))?;
//! assert_eq!(outcome.percentage, 117);
//! assert!(outcome.alert.is_some());
//! # Ok::<(), wealthwise::WealthError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod store;

pub use error::WealthError;
