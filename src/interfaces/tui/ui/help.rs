use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry<'a>(keys: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", keys), Style::default().fg(Color::Cyan)),
        Span::styled(action, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        section("LOGIN"),
        entry("Enter", "Sign in with your 6-character user ID"),
        entry("Esc", "Quit"),
        Line::from(""),
        section("CREATE FORM"),
        entry("Enter", "Shorten the URL"),
        entry("Ctrl+Y", "Copy the new short URL"),
        entry("Ctrl+R", "Refresh the list"),
        entry("Esc", "Clear the form (again: go to list)"),
        Line::from(""),
        section("URL LIST"),
        entry("Up/Down, j/k", "Navigate list"),
        entry("Home/End, g/G", "Jump to top / bottom"),
        entry("y", "Copy short URL"),
        entry("Y", "Copy original URL"),
        entry("c", "Copy the last created short URL"),
        entry("x", "Clear the creation result"),
        entry("d, Delete", "Delete the selected URL"),
        entry("r", "Refresh"),
        entry("a, n, i", "Back to the create form"),
        entry("L", "Log out"),
        Line::from(""),
        section("GENERAL"),
        entry("Tab", "Switch between form and list"),
        entry("?, F1", "Toggle this help"),
        entry("q", "Quit (from the list)"),
        entry("Ctrl+C", "Quit immediately"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
