use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique ID, used for lookup only (never for ordering)
    pub id: Uuid,
    /// Trimmed, never empty
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
    /// When the task was created (informational)
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a pending task from raw user input.
    ///
    /// Returns `None` when the trimmed text is empty.
    pub fn new(raw_text: &str) -> Option<Self> {
        Self::with_id(Uuid::new_v4(), raw_text)
    }

    /// Same as [`Task::new`] with a caller-chosen id
    pub fn with_id(id: Uuid, raw_text: &str) -> Option<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
            created_at: Local::now(),
        })
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Whether this record satisfies the text invariant
    pub fn has_valid_text(&self) -> bool {
        !self.text.trim().is_empty() && self.text.trim() == self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new_trims_text() {
        let task = Task::new("  buy milk \n").unwrap();
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_new_rejects_blank() {
        assert!(Task::new("").is_none());
        assert!(Task::new("   ").is_none());
        assert!(Task::new("\t\n").is_none());
    }

    #[test]
    fn test_task_new_ids_differ() {
        let a = Task::new("a").unwrap();
        let b = Task::new("a").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_toggle() {
        let mut task = Task::new("walk dog").unwrap();
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_has_valid_text() {
        let mut task = Task::new("ok").unwrap();
        assert!(task.has_valid_text());

        task.text = "   ".to_string();
        assert!(!task.has_valid_text());

        task.text = " padded ".to_string();
        assert!(!task.has_valid_text());
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task::new("json").unwrap();
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"completed\":false"));
    }
}
