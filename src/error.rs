//! Custom error types for WealthWise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for WealthWise operations
#[derive(Error, Debug)]
pub enum WealthError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad numeric or textual input
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation referenced a nonexistent name or id
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed snapshot payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl WealthError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(id: u32) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for WealthError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WealthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for WealthWise operations
pub type WealthResult<T> = Result<T, WealthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WealthError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = WealthError::category_not_found("Dining Out");
        assert_eq!(err.to_string(), "Category not found: Dining Out");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_goal_not_found_error() {
        let err = WealthError::goal_not_found(7);
        assert_eq!(err.to_string(), "Goal not found: 7");
    }

    #[test]
    fn test_parse_error() {
        let err = WealthError::Parse("expected an object".into());
        assert!(err.is_parse());
        assert_eq!(err.to_string(), "Parse error: expected an object");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WealthError = io_err.into();
        assert!(matches!(err, WealthError::Io(_)));
    }
}
