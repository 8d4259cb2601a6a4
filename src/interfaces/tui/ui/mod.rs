// UI submodules
mod common;
mod dashboard;
mod delete_confirm;
mod exiting;
mod help;
mod login;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use dashboard::draw_dashboard_screen;
pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use login::draw_login_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// The screen underneath an overlay
fn draw_base_screen(frame: &mut Frame, app: &App, area: Rect) {
    if app.dashboard.is_some() {
        draw_dashboard_screen(frame, app, area);
    } else {
        draw_login_screen(frame, app, area);
    }
}

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_screen {
        CurrentScreen::Login => draw_login_screen(frame, app, main_chunks[1]),
        CurrentScreen::Dashboard => draw_dashboard_screen(frame, app, main_chunks[1]),
        CurrentScreen::DeleteConfirm => {
            draw_dashboard_screen(frame, app, main_chunks[1]);
            draw_delete_confirm_screen(frame, app, main_chunks[1]);
        }
        CurrentScreen::Help => {
            draw_base_screen(frame, app, main_chunks[1]);
            draw_help_screen(frame, main_chunks[1]);
        }
        CurrentScreen::Exiting => {
            draw_base_screen(frame, app, main_chunks[1]);
            draw_exiting_screen(frame, main_chunks[1]);
        }
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
