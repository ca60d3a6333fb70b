//! Display formatting for terminal output
//!
//! Turns store contents into plain-text tables for the CLI.

pub mod alert;
pub mod category;
pub mod goal;
pub mod report;

pub use alert::{format_alert_list, format_month_list};
pub use category::{format_category_details, format_category_list};
pub use goal::{format_goal_details, format_goal_list};
