pub mod filter_bar;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use filter_bar::{render_filter_bar, render_stats};
use input_form::{render_add_button, render_input_form};
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{text::Span, widgets::Paragraph, Frame};
use styles::title_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let layout = create_layout(f.size());

    let date = chrono::Local::now().format("%a %b %d");
    let title = Paragraph::new(Span::styled(format!(" Tasks · {} ", date), title_style()));
    f.render_widget(title, layout.title_area);

    render_input_form(f, app, layout.input_area);
    render_add_button(f, app, layout.add_button_area);
    render_stats(f, app, layout.stats_area);
    render_filter_bar(f, app, layout.filter_area);
    render_list_pane(f, app, layout.list_area);
    render_keybindings(f, app.ui_mode, layout.keybindings_area);
}
