use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{
    border_style, button_style, default_style, disabled_button_style, focused_border_style,
    hint_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the new-task input box
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::Adding;

    let line = if app.input.is_empty() && !focused {
        Line::from(Span::styled("What needs to be done? (press a)", hint_style()))
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.input.as_str(), default_style()),
            if focused {
                Span::styled("█", default_style()) // Cursor
            } else {
                Span::raw("")
            },
        ])
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                focused_border_style()
            } else {
                border_style()
            })
            .title(" New task "),
    );

    f.render_widget(paragraph, area);
}

/// Render the [ Add ] control, dimmed while the input is blank
pub fn render_add_button(f: &mut Frame, app: &AppState, area: Rect) {
    let style = if app.can_add() {
        button_style()
    } else {
        disabled_button_style()
    };

    let button = Paragraph::new(Span::styled(" Add ", style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));

    f.render_widget(button, area);
}
