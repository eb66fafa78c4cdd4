use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints = match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("space toggle   "),
            Span::raw("enter edit   "),
            Span::raw("d delete   "),
            Span::raw("a add   "),
            Span::raw("tab/1-3 filter   "),
            Span::raw("c clear done   "),
            Span::raw("q quit"),
        ]),
        UiMode::Adding => Line::from(vec![
            Span::raw(" enter add   "),
            Span::raw("esc back"),
        ]),
        UiMode::Editing => Line::from(vec![
            Span::raw(" enter save   "),
            Span::raw("esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
