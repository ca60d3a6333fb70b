//! Dismissible budget notifications

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AlertId;

/// How loudly an alert should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Info,
    Success,
    Error,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// A transient notification describing a budget-state condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAlert {
    pub id: AlertId,
    pub message: String,
    pub severity: AlertSeverity,
}

impl BudgetAlert {
    pub fn new(id: AlertId, message: impl Into<String>, severity: AlertSeverity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
        }
    }

    /// The warning raised when a category crosses the alert threshold
    pub fn category_threshold(id: AlertId, category: &str, percentage: i64) -> Self {
        Self::new(
            id,
            format!("{} category is at {}% of budget", category, percentage),
            AlertSeverity::Warning,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_message() {
        let alert = BudgetAlert::category_threshold(AlertId::new(5), "Health", 117);
        assert_eq!(alert.message, "Health category is at 117% of budget");
        assert_eq!(alert.severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&AlertSeverity::Success).unwrap();
        assert_eq!(json, "\"success\"");
        let parsed: AlertSeverity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, AlertSeverity::Error);
    }
}
