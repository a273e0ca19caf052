//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was appended to a group
    Append,
    /// Balances were recomputed and persisted
    Recompute,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Append => write!(f, "APPEND"),
            Operation::Recompute => write!(f, "RECOMPUTE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Group,
    Expense,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Group => write!(f, "Group"),
            EntityType::Expense => write!(f, "Expense"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// Group the operation touched
    pub group: String,

    /// Human-readable detail (e.g., payer and amount)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// JSON snapshot of what was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new<T: Serialize>(
        operation: Operation,
        entity_type: EntityType,
        group: impl Into<String>,
        detail: Option<String>,
        snapshot: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            group: group.into(),
            detail,
            snapshot: serde_json::to_value(snapshot).ok(),
        }
    }

    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        group: impl Into<String>,
        detail: Option<String>,
        entity: &T,
    ) -> Self {
        Self::new(Operation::Create, entity_type, group, detail, entity)
    }

    /// Create a new audit entry for an appended entity
    pub fn append<T: Serialize>(
        entity_type: EntityType,
        group: impl Into<String>,
        detail: Option<String>,
        entity: &T,
    ) -> Self {
        Self::new(Operation::Append, entity_type, group, detail, entity)
    }

    /// Create a new audit entry recording freshly computed balances
    pub fn recompute<T: Serialize>(group: impl Into<String>, balances: &T) -> Self {
        Self::new(Operation::Recompute, EntityType::Group, group, None, balances)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.group
        );

        if let Some(detail) = &self.detail {
            output.push_str(&format!(" ({})", detail));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Append.to_string(), "APPEND");
        assert_eq!(Operation::Recompute.to_string(), "RECOMPUTE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Group,
            "trip",
            None,
            &json!({"participants": ["A", "B"]}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Group);
        assert!(entry.snapshot.is_some());
    }

    #[test]
    fn test_serialized_names() {
        let entry = AuditEntry::recompute("trip", &json!({"A": 1.0}));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["operation"], json!("recompute"));
        assert_eq!(value["entity_type"], json!("group"));
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn test_format_human_readable() {
        let entry = AuditEntry::append(
            EntityType::Expense,
            "trip",
            Some("Agnes paid 12.00".to_string()),
            &json!({}),
        );
        let output = entry.format_human_readable();
        assert!(output.contains("APPEND Expense trip"));
        assert!(output.contains("(Agnes paid 12.00)"));
    }
}
