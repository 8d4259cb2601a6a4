use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};
use crate::view::CopyTarget;

/// Handle dashboard input; keys go to the focused panel
pub fn handle_dashboard_screen(app: &mut App, key: KeyEvent) -> bool {
    if app.is_busy() {
        return false;
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.focus = match app.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
        return false;
    }

    match app.focus {
        Focus::Form => handle_form_panel(app, key),
        Focus::List => handle_list_panel(app, key.code),
    }
    false
}

fn handle_form_panel(app: &mut App, key: KeyEvent) {
    let Some(dashboard) = app.dashboard.as_mut() else {
        return;
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('y') => app.copy_result(),
            KeyCode::Char('r') => app.refresh(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_url(),
        KeyCode::Backspace => dashboard.form.pop_char(),
        KeyCode::Esc => {
            // 第一次 Esc 清空表单，空表单时切到列表
            if dashboard.form.input.is_empty() && dashboard.form.result().is_none() {
                app.focus = Focus::List;
            } else {
                app.clear_form();
            }
        }
        KeyCode::Down => app.focus = Focus::List,
        KeyCode::F(1) => app.open_overlay(CurrentScreen::Help),
        KeyCode::Char(c) => dashboard.form.push_char(c),
        _ => {}
    }
}

fn handle_list_panel(app: &mut App, key_code: KeyCode) {
    let Some(dashboard) = app.dashboard.as_mut() else {
        return;
    };

    match key_code {
        KeyCode::Up | KeyCode::Char('k') => dashboard.list.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => dashboard.list.select_next(),
        KeyCode::Home | KeyCode::Char('g') => dashboard.list.select_first(),
        KeyCode::End | KeyCode::Char('G') => dashboard.list.select_last(),
        KeyCode::Char('y') => app.copy_selected(CopyTarget::ShortUrl),
        KeyCode::Char('Y') => app.copy_selected(CopyTarget::OriginalUrl),
        KeyCode::Char('c') => app.copy_result(),
        KeyCode::Char('x') => app.clear_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('i') => app.focus = Focus::Form,
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('?') | KeyCode::F(1) => app.open_overlay(CurrentScreen::Help),
        KeyCode::Char('q') | KeyCode::Esc => app.open_overlay(CurrentScreen::Exiting),
        _ => {}
    }
}

/// Handle delete confirmation popup
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> bool {
    if app.is_busy() {
        return false;
    }

    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    false
}
