use crate::app::AppState;
use crate::domain::{Filter, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Adding => handle_adding_mode(app, key),
        UiMode::Editing => handle_editing_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Char('X') => {
            app.toggle_selected()?;
            Ok(false)
        }

        // Edit selected task
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_selected();
            Ok(false)
        }

        // Delete selected task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_selected()?;
            Ok(false)
        }

        // Focus the add input
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') => {
            app.start_adding();
            Ok(false)
        }

        // Filters
        KeyCode::Tab | KeyCode::Right => {
            app.next_filter();
            Ok(false)
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.prev_filter();
            Ok(false)
        }
        KeyCode::Char('1') => {
            app.set_filter(Filter::All);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_filter(Filter::Pending);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_filter(Filter::Completed);
            Ok(false)
        }

        // Clear completed
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.clear_completed()?;
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing a new task
fn handle_adding_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input()?;
            Ok(false)
        }
        KeyCode::Esc => {
            app.stop_adding();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while editing a row
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit()?;
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_edit();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.edit_backspace();
            Ok(false)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
