use super::task::Task;
use super::views::TaskViews;
use serde::{Deserialize, Serialize};

/// Which subset of the task list is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// Display name for the filter bar
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// All filters in display order
    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Pending, Filter::Completed]
    }

    /// Position in the filter bar
    pub fn index(&self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Pending => 1,
            Filter::Completed => 2,
        }
    }

    /// Next filter, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Filter::All => Filter::Pending,
            Filter::Pending => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Previous filter, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Filter::All => Filter::Completed,
            Filter::Pending => Filter::All,
            Filter::Completed => Filter::Pending,
        }
    }
}

/// Pick the derived subset selected by `filter`
pub fn current_view<'v, 'a>(views: &'v TaskViews<'a>, filter: Filter) -> &'v [&'a Task] {
    match filter {
        Filter::All => &views.all,
        Filter::Pending => &views.pending,
        Filter::Completed => &views.completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        let mut tasks: Vec<Task> = ["one", "two", "three", "four"]
            .iter()
            .filter_map(|t| Task::new(t))
            .collect();
        tasks[1].completed = true;
        tasks[3].completed = true;
        tasks
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_next_prev_cycle() {
        for filter in Filter::all() {
            assert_eq!(filter.next().prev(), *filter);
        }
        assert_eq!(Filter::Completed.next(), Filter::All);
        assert_eq!(Filter::All.prev(), Filter::Completed);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, filter) in Filter::all().iter().enumerate() {
            assert_eq!(filter.index(), i);
        }
    }

    #[test]
    fn test_current_view_all() {
        let tasks = sample_tasks();
        let views = TaskViews::from_tasks(&tasks);
        let view = current_view(&views, Filter::All);
        assert_eq!(view.len(), 4);
        assert_eq!(view[0].id, tasks[0].id);
    }

    #[test]
    fn test_current_view_pending() {
        let tasks = sample_tasks();
        let views = TaskViews::from_tasks(&tasks);
        let view = current_view(&views, Filter::Pending);
        let texts: Vec<&str> = view.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "three"]);
        assert!(view.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_current_view_completed() {
        let tasks = sample_tasks();
        let views = TaskViews::from_tasks(&tasks);
        let view = current_view(&views, Filter::Completed);
        let texts: Vec<&str> = view.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "four"]);
    }

    #[test]
    fn test_current_view_empty_collection() {
        let tasks: Vec<Task> = Vec::new();
        let views = TaskViews::from_tasks(&tasks);
        for filter in Filter::all() {
            assert!(current_view(&views, *filter).is_empty());
        }
    }

    #[test]
    fn test_filter_serde_lowercase() {
        let json = serde_json::to_string(&Filter::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let back: Filter = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, Filter::Completed);
    }
}
