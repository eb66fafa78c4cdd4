use super::task::Task;
use super::views::TaskViews;
use uuid::Uuid;

/// The authoritative, ordered task list (most recent first).
///
/// Every operation is total: unknown ids are ignored and reported as "no change"
/// so the caller can skip persisting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Derived subsets, recomputed on each call
    pub fn views(&self) -> TaskViews<'_> {
        TaskViews::from_tasks(&self.tasks)
    }

    /// Prepend a new pending task. Returns its id, or `None` if the trimmed text is empty.
    pub fn add(&mut self, raw_text: &str) -> Option<Uuid> {
        let mut id = Uuid::new_v4();
        while self.get(id).is_some() {
            id = Uuid::new_v4();
        }

        let task = Task::with_id(id, raw_text)?;
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Remove the task with `id`
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Flip `completed` on the task with `id`
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Overwrite the text of the task with `id`.
    ///
    /// No validation happens here; callers go through `TaskRow::commit`,
    /// which rejects blank and unchanged values.
    pub fn edit(&mut self, id: Uuid, text: String) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.text = text;
                true
            }
            None => false,
        }
    }

    /// Remove every completed task, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn texts(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    fn assert_unique_ids(list: &TaskList) {
        let ids: HashSet<Uuid> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), list.len(), "duplicate ids in {:?}", list);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TaskList::default();
        list.add("keep");
        let before = list.clone();

        assert!(list.add("").is_none());
        assert!(list.add("   ").is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_prepends_pending_task() {
        let mut list = TaskList::default();
        let first = list.add("A").unwrap();
        let id = list.add("buy milk").unwrap();

        assert_eq!(list.len(), 2);
        let task = &list.tasks()[0];
        assert_eq!(task.id, id);
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
        assert_ne!(id, first);
    }

    #[test]
    fn test_add_trims() {
        let mut list = TaskList::default();
        list.add("   padded  ");
        assert_eq!(texts(&list), vec!["padded"]);
    }

    #[test]
    fn test_delete() {
        let mut list = TaskList::default();
        let a = list.add("A").unwrap();
        list.add("B");

        assert!(list.delete(a));
        assert_eq!(texts(&list), vec!["B"]);

        // Second delete of the same id is a no-op
        assert!(!list.delete(a));
        assert_eq!(texts(&list), vec!["B"]);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = TaskList::default();
        list.add("A");
        let b = list.add("B").unwrap();
        list.add("C");
        let before = list.clone();

        assert!(list.toggle(b));

        for (after, original) in list.tasks().iter().zip(before.tasks()) {
            if after.id == b {
                assert_eq!(after.completed, !original.completed);
                assert_eq!(after.text, original.text);
                assert_eq!(after.created_at, original.created_at);
            } else {
                assert_eq!(after, original);
            }
        }
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = TaskList::default();
        list.add("A");
        let before = list.clone();

        assert!(!list.toggle(Uuid::new_v4()));
        assert_eq!(list, before);
    }

    #[test]
    fn test_edit_overwrites_unconditionally() {
        let mut list = TaskList::default();
        let id = list.add("draft").unwrap();

        assert!(list.edit(id, "final".to_string()));
        assert_eq!(list.get(id).unwrap().text, "final");

        assert!(!list.edit(Uuid::new_v4(), "ghost".to_string()));
        assert_eq!(texts(&list), vec!["final"]);
    }

    #[test]
    fn test_clear_completed_keeps_pending_order() {
        let mut list = TaskList::default();
        for text in ["1", "2", "3", "4", "5"] {
            list.add(text);
        }
        // list is [5, 4, 3, 2, 1]
        let ids: Vec<Uuid> = list.tasks().iter().map(|t| t.id).collect();
        list.toggle(ids[1]);
        list.toggle(ids[3]);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(texts(&list), vec!["5", "3", "1"]);
        assert!(list.tasks().iter().all(|t| !t.completed));

        assert_eq!(list.clear_completed(), 0);
    }

    #[test]
    fn test_ids_stay_unique_across_operations() {
        let mut list = TaskList::default();
        for i in 0..20 {
            let id = list.add(&format!("task {}", i)).unwrap();
            assert_unique_ids(&list);
            if i % 3 == 0 {
                list.toggle(id);
            }
            if i % 5 == 0 {
                list.delete(id);
            }
            if i % 7 == 0 {
                list.clear_completed();
            }
            assert_unique_ids(&list);
        }
    }

    #[test]
    fn test_scenario_add_toggle_clear() {
        let mut list = TaskList::default();
        list.add("A");
        let b = list.add("B").unwrap();
        assert_eq!(texts(&list), vec!["B", "A"]);

        list.toggle(b);
        let counts = list.views().counts();
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.completed, 1);

        list.clear_completed();
        assert_eq!(texts(&list), vec!["A"]);
    }
}
