use crate::app::AppState;
use crate::domain::{Filter, TaskCounts};
use crate::ui::styles::{active_filter_style, count_style, default_style, hint_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Stats summary spans: total / completed / pending
fn stats_line(counts: TaskCounts) -> Line<'static> {
    Line::from(vec![
        Span::raw(" Total: "),
        Span::styled(counts.total.to_string(), count_style()),
        Span::raw("  ·  Completed: "),
        Span::styled(counts.completed.to_string(), count_style()),
        Span::raw("  ·  Pending: "),
        Span::styled(counts.pending.to_string(), count_style()),
    ])
}

/// Label of the clear control, `None` when there is nothing to clear
pub fn clear_completed_label(counts: TaskCounts) -> Option<String> {
    (counts.completed > 0).then(|| format!("c Clear completed ({}) ", counts.completed))
}

/// Render the stats line
pub fn render_stats(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Paragraph::new(stats_line(app.counts())), area);
}

/// Render the filter tabs and, if any task is completed, the clear control
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let counts = app.counts();
    let clear_label = clear_completed_label(counts);
    let clear_width = clear_label.as_ref().map_or(0, |label| label.chars().count() as u16);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(clear_width)])
        .split(area);

    let titles: Vec<Line> = Filter::all()
        .iter()
        .map(|filter| Line::from(filter.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.filter.index())
        .style(default_style())
        .highlight_style(active_filter_style())
        .divider("·");
    f.render_widget(tabs, chunks[0]);

    if let Some(label) = clear_label {
        f.render_widget(Paragraph::new(Span::styled(label, hint_style())), chunks[1]);
    }
}
