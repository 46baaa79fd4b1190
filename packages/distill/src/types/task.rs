//! Task records extracted from transcripts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default assignee when the transcript doesn't name a responsible person.
pub const DEFAULT_ASSIGNEE: &str = "Team";

/// Placeholder due date when no date was mentioned.
pub const UNSET_DUE_DATE: &str = "TBD";

/// Task priority, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank for presentation (High first). Never used to mutate
    /// stored order.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single action item extracted from a transcript.
///
/// Immutable once scored; the deduplicator only ever drops whole records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskRecord {
    /// The specific action item or task.
    pub task: String,

    /// Person responsible, or "Team" if unclear.
    #[serde(default = "default_assignee")]
    pub assignee: String,

    /// Due date as YYYY-MM-DD, or "TBD".
    #[serde(default = "default_due_date")]
    pub due_date: String,

    /// High, Medium, or Low.
    pub priority: Priority,
}

fn default_assignee() -> String {
    DEFAULT_ASSIGNEE.to_string()
}

fn default_due_date() -> String {
    UNSET_DUE_DATE.to_string()
}

impl TaskRecord {
    pub fn new(task: impl Into<String>, priority: Priority) -> Self {
        Self {
            task: task.into(),
            assignee: default_assignee(),
            due_date: default_due_date(),
            priority,
        }
    }

    /// Set the assignee.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Identity for deduplication: case-folded, trimmed (task, assignee).
    pub fn identity_key(&self) -> (String, String) {
        (
            self.task.trim().to_lowercase(),
            self.assignee.trim().to_lowercase(),
        )
    }
}

/// An ordered list of task records.
///
/// Insertion order is irrelevant to scoring but relevant to display;
/// [`TaskList::sorted_by_priority`] returns a presentation ordering
/// without mutating the stored one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskList {
    pub items: Vec<TaskRecord>,
}

impl TaskList {
    pub fn new(items: Vec<TaskRecord>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Records sorted High → Medium → Low for presentation.
    pub fn sorted_by_priority(&self) -> Vec<&TaskRecord> {
        let mut sorted: Vec<&TaskRecord> = self.items.iter().collect();
        sorted.sort_by_key(|record| record.priority.rank());
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serde_literals() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
        let parsed: Priority = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
        assert!(serde_json::from_str::<Priority>("\"urgent\"").is_err());
    }

    #[test]
    fn test_record_defaults_apply_on_deserialize() {
        let record: TaskRecord =
            serde_json::from_str(r#"{"task": "Ship the release", "priority": "High"}"#).unwrap();
        assert_eq!(record.assignee, "Team");
        assert_eq!(record.due_date, "TBD");
    }

    #[test]
    fn test_identity_key_folds_case_and_whitespace() {
        let a = TaskRecord::new("  Send Report ", Priority::High).with_assignee("ALICE");
        let b = TaskRecord::new("send report", Priority::Low).with_assignee(" alice ");
        assert_eq!(a.identity_key(), b.identity_key());
    }

    #[test]
    fn test_sorted_by_priority_does_not_mutate() {
        let list = TaskList::new(vec![
            TaskRecord::new("low first", Priority::Low),
            TaskRecord::new("then high", Priority::High),
        ]);
        let sorted = list.sorted_by_priority();
        assert_eq!(sorted[0].priority, Priority::High);
        // Stored order untouched
        assert_eq!(list.items[0].priority, Priority::Low);
    }
}
