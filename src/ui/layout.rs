use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub title_area: Rect,
    pub input_area: Rect,
    pub add_button_area: Rect,
    pub stats_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub keybindings_area: Rect,
}

/// Width of the [ Add ] control
const ADD_BUTTON_WIDTH: u16 = 9;

/// Create the main layout, top to bottom:
/// - title (1 row)
/// - input box with the Add control on its right (3 rows)
/// - stats line (1 row)
/// - filter bar (1 row)
/// - task list (rest)
/// - keybindings bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input
            Constraint::Length(1), // Stats
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // List
            Constraint::Length(1), // Keybindings
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(ADD_BUTTON_WIDTH)])
        .split(rows[1]);

    MainLayout {
        title_area: rows[0],
        input_area: input_row[0],
        add_button_area: input_row[1],
        stats_area: rows[2],
        filter_area: rows[3],
        list_area: rows[4],
        keybindings_area: rows[5],
    }
}
