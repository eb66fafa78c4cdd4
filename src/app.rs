use crate::domain::{current_view, Filter, RowAction, Task, TaskCounts, TaskList, TaskRow, UiMode};
use crate::persistence::{load_tasks, save_tasks, AppConfig, TaskStore};
use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Main application state
pub struct AppState {
    /// The authoritative task list
    pub tasks: TaskList,
    store: Box<dyn TaskStore>,
    /// Per-task row controllers (rows without an entry are viewing)
    pub rows: HashMap<Uuid, TaskRow>,
    pub filter: Filter,
    /// Text typed into the add-task input
    pub input: String,
    pub ui_mode: UiMode,
    /// Index into the currently visible (filtered) tasks
    pub selected_index: usize,
    pub use_unicode: bool,
}

impl AppState {
    /// Build the app state, loading the task list from `store`
    pub fn new(store: Box<dyn TaskStore>, config: &AppConfig) -> Self {
        let tasks = TaskList::new(load_tasks(&*store));
        info!(count = tasks.len(), filter = config.default_filter.label(), "task list ready");

        Self {
            tasks,
            store,
            rows: HashMap::new(),
            filter: config.default_filter,
            input: String::new(),
            ui_mode: UiMode::Normal,
            selected_index: 0,
            use_unicode: config.use_unicode,
        }
    }

    /// Tasks shown under the current filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let views = self.tasks.views();
        current_view(&views, self.filter).to_vec()
    }

    pub fn counts(&self) -> TaskCounts {
        self.tasks.views().counts()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<Uuid> {
        self.selected_task().map(|task| task.id)
    }

    /// Row controller for `id`, if it has left the default state
    pub fn row(&self, id: Uuid) -> Option<&TaskRow> {
        self.rows.get(&id)
    }

    fn row_mut(&mut self, id: Uuid) -> &mut TaskRow {
        self.rows.entry(id).or_insert_with(|| TaskRow::new(id))
    }

    /// The row currently being edited
    pub fn editing_row(&self) -> Option<&TaskRow> {
        self.rows.values().find(|row| row.is_editing())
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_tasks().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_tasks().len();
        if visible == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= visible {
            self.selected_index = visible - 1;
        }
    }

    /// Replace the current filter
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_selection();
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    /// Focus the add-task input
    pub fn start_adding(&mut self) {
        self.ui_mode = UiMode::Adding;
    }

    /// Leave the add-task input, keeping whatever was typed
    pub fn stop_adding(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Whether the Add control is enabled
    pub fn can_add(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Add the typed task and clear the input. Blank input does nothing.
    pub fn submit_input(&mut self) -> Result<()> {
        if !self.can_add() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.input);
        self.add_task(&text)?;
        Ok(())
    }

    /// Prepend a task and persist
    pub fn add_task(&mut self, raw_text: &str) -> Result<Option<Uuid>> {
        let Some(id) = self.tasks.add(raw_text) else {
            return Ok(None);
        };
        debug!(%id, "added task");

        if self.filter != Filter::Completed {
            self.selected_index = 0;
        }
        self.persist()?;
        Ok(Some(id))
    }

    /// Toggle completion of the selected task
    pub fn toggle_selected(&mut self) -> Result<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        match self.row_mut(id).toggle() {
            Some(action) => self.apply(action),
            None => Ok(()),
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) -> Result<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        match self.row_mut(id).delete() {
            Some(action) => self.apply(action),
            None => Ok(()),
        }
    }

    /// Put the selected row into edit mode
    pub fn start_edit_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let (id, text) = (task.id, task.text.clone());

        self.row_mut(id).start_edit(&text);
        self.ui_mode = UiMode::Editing;
    }

    fn editing_row_mut(&mut self) -> Option<&mut TaskRow> {
        self.rows.values_mut().find(|row| row.is_editing())
    }

    pub fn edit_add_char(&mut self, c: char) {
        if let Some(row) = self.editing_row_mut() {
            row.push_char(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(row) = self.editing_row_mut() {
            row.backspace();
        }
    }

    /// Commit the edit in progress; blank or unchanged text is discarded
    pub fn commit_edit(&mut self) -> Result<()> {
        self.ui_mode = UiMode::Normal;

        let Some(id) = self.editing_row().map(|row| row.id) else {
            return Ok(());
        };
        let current_text = match self.tasks.get(id) {
            Some(task) => task.text.clone(),
            None => {
                // Task vanished while editing
                self.rows.remove(&id);
                return Ok(());
            }
        };

        match self.row_mut(id).commit(&current_text) {
            Some(action) => self.apply(action),
            None => {
                debug!(%id, "edit discarded");
                Ok(())
            }
        }
    }

    /// Abandon the edit in progress
    pub fn cancel_edit(&mut self) {
        if let Some(row) = self.editing_row_mut() {
            row.cancel();
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Remove every completed task
    pub fn clear_completed(&mut self) -> Result<()> {
        let removed = self.tasks.clear_completed();
        if removed == 0 {
            return Ok(());
        }
        debug!(removed, "cleared completed tasks");

        self.prune_rows();
        self.clamp_selection();
        self.persist()
    }

    /// Apply a row's mutation to the task list and persist if anything changed
    #[tracing::instrument(skip(self))]
    pub fn apply(&mut self, action: RowAction) -> Result<()> {
        let changed = match action {
            RowAction::Toggle(id) => self.tasks.toggle(id),
            RowAction::Delete(id) => {
                let deleted = self.tasks.delete(id);
                self.prune_rows();
                deleted
            }
            RowAction::Edit { id, text } => self.tasks.edit(id, text),
        };

        if !changed {
            debug!("unknown task id, nothing to do");
            return Ok(());
        }

        self.clamp_selection();
        self.persist()
    }

    fn prune_rows(&mut self) {
        let tasks = &self.tasks;
        self.rows.retain(|id, _| tasks.get(*id).is_some());
    }

    /// Write the whole task list to the store
    fn persist(&mut self) -> Result<()> {
        save_tasks(&mut *self.store, self.tasks.tasks())
    }
}
