use super::task::Task;

/// Counts shown in the stats line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Read-only subsets of the task list, rebuilt from the collection on every call
#[derive(Debug, Clone)]
pub struct TaskViews<'a> {
    pub all: Vec<&'a Task>,
    pub pending: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl<'a> TaskViews<'a> {
    /// Partition `tasks` into pending and completed, keeping collection order
    pub fn from_tasks(tasks: &'a [Task]) -> Self {
        let all: Vec<&Task> = tasks.iter().collect();
        let (completed, pending): (Vec<&Task>, Vec<&Task>) =
            all.iter().copied().partition(|task| task.completed);

        Self {
            all,
            pending,
            completed,
        }
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts {
            total: self.all.len(),
            completed: self.completed.len(),
            pending: self.pending.len(),
        }
    }
}

/// Checkbox glyph for a task row
pub fn checkbox(completed: bool, use_unicode: bool) -> &'static str {
    match (completed, use_unicode) {
        (true, true) => "☑",
        (false, true) => "☐",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}
