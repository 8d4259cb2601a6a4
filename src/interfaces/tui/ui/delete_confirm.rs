use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dashboard) = app.dashboard.as_ref() else {
        return;
    };
    let Some(code) = dashboard.pending_delete() else {
        return;
    };
    let record = dashboard.list.records().iter().find(|r| r.code == code);

    let inner_area = Popup::new("Confirm Delete", popup::DELETE_CONFIRM)
        .theme_color(Color::Red)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete this short URL?",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Code: ", Style::default().fg(Color::DarkGray)),
            Span::styled(code.to_string(), Style::default().fg(Color::Cyan).bold()),
        ]),
    ];
    if let Some(record) = record {
        text.push(Line::from(vec![
            Span::styled("URL: ", Style::default().fg(Color::DarkGray)),
            Span::styled(record.original_url.clone(), Style::default().fg(Color::Blue)),
        ]));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "This action cannot be undone!",
        Style::default().fg(Color::Red).bold(),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}
