//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    Import,
    Export,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Import => write!(f, "IMPORT"),
            Operation::Export => write!(f, "EXPORT"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Category,
    Goal,
    Alert,
    Month,
    Overview,
    Snapshot,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Category => write!(f, "Category"),
            EntityType::Goal => write!(f, "Goal"),
            EntityType::Alert => write!(f, "Alert"),
            EntityType::Month => write!(f, "Month"),
            EntityType::Overview => write!(f, "Overview"),
            EntityType::Snapshot => write!(f, "Snapshot"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Category name, goal/alert id, month label or file path
    pub entity_id: String,

    /// JSON representation of the entity before the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable summary of the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    fn base(operation: Operation, entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            before: None,
            after: None,
            summary: None,
        }
    }

    /// Entry for a newly created entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::base(Operation::Create, entity_type, entity_id);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// Entry for an update with before/after values
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Self {
        let mut entry = Self::base(Operation::Update, entity_type, entity_id);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.summary = summary;
        entry
    }

    /// Entry for a removed entity
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::base(Operation::Delete, entity_type, entity_id);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    /// Entry for a snapshot import or export; `entity_id` is the file involved
    pub fn snapshot(operation: Operation, path: impl Into<String>, summary: String) -> Self {
        let mut entry = Self::base(operation, EntityType::Snapshot, path);
        entry.summary = Some(summary);
        entry
    }

    /// One-line rendering used by `wealthwise log`
    pub fn format_line(&self) -> String {
        let mut line = format!(
            "{} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_type,
            self.entity_id
        );
        if let Some(summary) = &self.summary {
            line.push_str(" - ");
            line.push_str(summary);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(EntityType::Goal, "5", &json!({"name": "Boat"}));
        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(json!({"name": "Boat"})));
    }

    #[test]
    fn test_update_entry_line() {
        let entry = AuditEntry::update(
            EntityType::Category,
            "Groceries",
            &json!({"allocated": 600}),
            &json!({"allocated": 900}),
            Some("allocated: $600.00 -> $900.00".into()),
        );
        let line = entry.format_line();
        assert!(line.contains("UPDATE Category Groceries"));
        assert!(line.ends_with("allocated: $600.00 -> $900.00"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::snapshot(Operation::Export, "out.json", "6 categories".into());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["operation"], "export");
        assert_eq!(value["entity_type"], "snapshot");
        assert!(value.get("before").is_none());
    }
}
