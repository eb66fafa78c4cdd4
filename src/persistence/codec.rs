use crate::domain::Task;
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// Why a stored task list was rejected
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("stored task list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("task {0} has empty or untrimmed text")]
    BlankText(Uuid),
    #[error("task id {0} appears more than once")]
    DuplicateId(Uuid),
}

/// Serialize the task list to its stored form (a JSON array of tasks)
pub fn serialize_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tasks)
}

/// Parse a stored task list, checking the record invariants
pub fn parse_tasks(content: &str) -> Result<Vec<Task>, CodecError> {
    let tasks: Vec<Task> = serde_json::from_str(content)?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if !task.has_valid_text() {
            return Err(CodecError::BlankText(task.id));
        }
        if !seen.insert(task.id) {
            return Err(CodecError::DuplicateId(task.id));
        }
    }

    Ok(tasks)
}
