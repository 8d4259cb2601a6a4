use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle login screen input
pub fn handle_login_screen(app: &mut App, key: KeyEvent) -> bool {
    if app.is_busy() {
        return false;
    }

    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.login.pop_char(),
        KeyCode::Esc => app.open_overlay(CurrentScreen::Exiting),
        KeyCode::F(1) => app.open_overlay(CurrentScreen::Help),
        KeyCode::Char(c) => app.login.push_char(c),
        _ => {}
    }
    false
}
