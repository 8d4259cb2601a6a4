use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

pub fn draw_exiting_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Exit", popup::EXITING)
        .theme_color(Color::Magenta)
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit TinyURL?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Green).bold()),
            Span::raw(" Yes   "),
            Span::styled("[n]", Style::default().fg(Color::Red).bold()),
            Span::raw(" No"),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner_area);
}
