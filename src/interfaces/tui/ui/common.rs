use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};

/// Draw title bar with version and login state
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("TinyURL", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
    ];

    match &app.dashboard {
        Some(dashboard) => {
            spans.push(Span::styled(
                "Logged in as: ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                dashboard.user_id().to_string(),
                Style::default().fg(Color::White).bold(),
            ));
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                format!("URLs: {}", dashboard.list.len()),
                Style::default().fg(Color::Yellow),
            ));
        }
        None => spans.push(Span::styled(
            "Not logged in",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if app.is_busy() {
        (
            "Working...".to_string(),
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    match app.current_screen {
        CurrentScreen::Login => vec![
            ("Enter", "Sign In", Color::Green),
            ("F1", "Help", Color::Blue),
            ("Esc", "Quit", Color::Magenta),
        ],
        CurrentScreen::Dashboard => match app.focus {
            Focus::Form => vec![
                ("Enter", "Shorten", Color::Green),
                ("Ctrl+Y", "Copy Result", Color::Cyan),
                ("Esc", "Clear", Color::Yellow),
                ("Tab", "URL List", Color::Cyan),
                ("F1", "Help", Color::Blue),
            ],
            Focus::List => vec![
                ("Up/Down", "Navigate", Color::Cyan),
                ("y/Y", "Copy Short/Original", Color::Cyan),
                ("d", "Delete", Color::Red),
                ("r", "Refresh", Color::Green),
                ("Tab", "Form", Color::Cyan),
                ("L", "Logout", Color::Yellow),
                ("?", "Help", Color::Blue),
                ("q", "Quit", Color::Magenta),
            ],
        },
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
