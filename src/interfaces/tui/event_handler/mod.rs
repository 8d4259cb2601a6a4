//! Event handling for TUI
//!
//! Handles keyboard events and delegates to the handler of the current screen:
//! - login_screen: Login
//! - dashboard_screens: Dashboard, DeleteConfirm
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod dashboard_screens;
mod login_screen;
mod misc_screens;

use dashboard_screens::*;
use login_screen::*;
use misc_screens::*;

/// Handle keyboard input based on current screen; returns true to exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.current_screen {
        CurrentScreen::Login => handle_login_screen(app, key),
        CurrentScreen::Dashboard => handle_dashboard_screen(app, key),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key.code),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
