use uuid::Uuid;

/// View/edit state of a single task row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing {
        buffer: String,
    },
}

/// Mutation a row asks the collection to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Toggle(Uuid),
    Delete(Uuid),
    Edit { id: Uuid, text: String },
}

/// Per-task row controller.
///
/// Rows never touch the task list directly; they hand back a [`RowAction`]
/// which the app applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: Uuid,
    pub mode: RowMode,
}

impl TaskRow {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            mode: RowMode::Viewing,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing { .. })
    }

    /// Current edit buffer, if editing
    pub fn buffer(&self) -> Option<&str> {
        match &self.mode {
            RowMode::Editing { buffer } => Some(buffer),
            RowMode::Viewing => None,
        }
    }

    /// Enter edit mode with a copy of the stored text
    pub fn start_edit(&mut self, current_text: &str) {
        if !self.is_editing() {
            self.mode = RowMode::Editing {
                buffer: current_text.to_string(),
            };
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let RowMode::Editing { buffer } = &mut self.mode {
            buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let RowMode::Editing { buffer } = &mut self.mode {
            buffer.pop();
        }
    }

    pub fn set_buffer(&mut self, text: &str) {
        if let RowMode::Editing { buffer } = &mut self.mode {
            *buffer = text.to_string();
        }
    }

    /// Leave edit mode, returning an edit only if the trimmed buffer is
    /// non-empty and differs from `current_text`
    pub fn commit(&mut self, current_text: &str) -> Option<RowAction> {
        let RowMode::Editing { buffer } = std::mem::take(&mut self.mode) else {
            return None;
        };

        let trimmed = buffer.trim();
        if trimmed.is_empty() || trimmed == current_text {
            return None;
        }

        Some(RowAction::Edit {
            id: self.id,
            text: trimmed.to_string(),
        })
    }

    /// Leave edit mode, discarding the buffer
    pub fn cancel(&mut self) {
        self.mode = RowMode::Viewing;
    }

    /// Toggle completion; suppressed while editing
    pub fn toggle(&self) -> Option<RowAction> {
        (!self.is_editing()).then_some(RowAction::Toggle(self.id))
    }

    /// Delete the task; only reachable while viewing
    pub fn delete(&self) -> Option<RowAction> {
        (!self.is_editing()).then_some(RowAction::Delete(self.id))
    }
}
