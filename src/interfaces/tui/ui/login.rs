use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::utils::USER_ID_LENGTH;

pub fn draw_login_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner = Popup::new(" Sign In ", popup::LOGIN)
        .theme_color(colors::PRIMARY)
        .render(frame, area);

    let field = InputField::new("User ID", &app.login.input)
        .active(!app.login.is_submitting())
        .disabled(app.login.is_submitting())
        .max_chars(USER_ID_LENGTH)
        .placeholder("6 letters or digits")
        .error(app.login.error());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(field.height()),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to TinyURL",
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(Span::styled(
            format!("Enter your {}-character user ID", USER_ID_LENGTH),
            Style::default().fg(colors::MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(intro, chunks[0]);

    field.render(frame, chunks[1]);

    let hint = if app.login.is_submitting() {
        Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(colors::WARNING).bold(),
        ))
    } else {
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors::MUTED)),
            Span::styled("[Enter]", Style::default().fg(Color::Green).bold()),
            Span::styled(" to sign in", Style::default().fg(colors::MUTED)),
        ])
    };
    frame.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center),
        chunks[2],
    );
}
