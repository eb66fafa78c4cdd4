use crate::app::AppState;
use crate::domain::{checkbox, Filter, Task, UiMode};
use crate::ui::styles::{
    border_style, checkbox_style, default_style, done_style, editing_style, focused_border_style,
    hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Message shown when the current view has no tasks
fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No tasks yet. Press a to add one.",
        Filter::Pending => "Nothing pending. Nice work!",
        Filter::Completed => "No completed tasks.",
    }
}

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible_tasks();
    let editing = app.ui_mode == UiMode::Editing;

    let title = format!(" {} ({}) ", app.filter.label(), visible.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if editing {
            focused_border_style()
        } else {
            border_style()
        })
        .title(Span::styled(title, title_style()));

    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled(empty_message(app.filter), hint_style())).block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let buffer = app.row(task.id).and_then(|row| row.buffer());
            let line = create_task_line(task, buffer, app.use_unicode);
            let style = if idx == app.selected_index && buffer.is_none() {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    let list = List::new(items).block(block);

    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single line for a task.
/// Format: ` ☐ buy milk` or, while editing, ` ✎ buy mil█`
fn create_task_line<'a>(task: &'a Task, edit_buffer: Option<&'a str>, use_unicode: bool) -> Line<'a> {
    if let Some(buffer) = edit_buffer {
        let marker = if use_unicode { " ✎ " } else { " > " };
        return Line::from(vec![
            Span::styled(marker, editing_style()),
            Span::styled(buffer, editing_style()),
            Span::styled("█", editing_style()), // Cursor
        ]);
    }

    let text_style = if task.completed {
        done_style()
    } else {
        default_style()
    };

    Line::from(vec![
        Span::raw(" "),
        Span::styled(checkbox(task.completed, use_unicode), checkbox_style(task.completed)),
        Span::raw(" "),
        Span::styled(task.text.as_str(), text_style),
    ])
}
