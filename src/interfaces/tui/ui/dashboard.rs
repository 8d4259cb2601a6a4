use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState, Wrap},
};

use super::widgets::InputField;
use crate::interfaces::tui::app::{App, Focus};
use crate::interfaces::tui::constants::{
    CREATED_COLUMN_WIDTH, ERROR_BANNER_HEIGHT, FORM_PANEL_HEIGHT, colors,
};
use crate::utils::truncate_display;
use crate::view::{Dashboard, ListStatus, UrlFormState};

pub fn draw_dashboard_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dashboard) = app.dashboard.as_ref() else {
        return;
    };

    let mut constraints = vec![Constraint::Length(FORM_PANEL_HEIGHT)];
    if dashboard.error().is_some() {
        constraints.push(Constraint::Length(ERROR_BANNER_HEIGHT));
    }
    constraints.push(Constraint::Min(5));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_form_panel(frame, app, dashboard, chunks[0]);
    if let Some(error) = dashboard.error() {
        draw_error_banner(frame, error, chunks[1]);
    }
    draw_url_list(frame, app, dashboard, chunks[chunks.len() - 1]);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { colors::PRIMARY } else { colors::MUTED };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}

fn labeled<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(colors::MUTED)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn draw_form_panel(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let form = &dashboard.form;
    let focused = app.focus == Focus::Form;

    let block = panel_block(" Create Short URL ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    InputField::new("URL to shorten", &form.input)
        .active(focused)
        .disabled(form.is_submitting())
        .placeholder("example.com/your-long-url")
        .render(frame, chunks[0]);

    let width = chunks[1].width.saturating_sub(16) as usize;
    let feedback: Vec<Line> = match &form.state {
        UrlFormState::Idle => vec![Line::from(Span::styled(
            "Will automatically prefix with https:// if no scheme is provided",
            Style::default().fg(colors::MUTED),
        ))],
        UrlFormState::Submitting => vec![Line::from(Span::styled(
            "Shortening...",
            Style::default().fg(colors::WARNING).bold(),
        ))],
        UrlFormState::Error(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(colors::ERROR).bold(),
        ))],
        UrlFormState::Success(created) => vec![
            Line::from(Span::styled(
                form.headline().unwrap_or_default(),
                Style::default().fg(colors::SUCCESS).bold(),
            )),
            labeled(
                "Short URL:    ",
                created.record.short_url.clone(),
                Color::Cyan,
            ),
            labeled(
                "Original URL: ",
                truncate_display(&created.record.original_url, width),
                Color::White,
            ),
            labeled("Created:      ", created.record.created_display(), Color::White),
        ],
    };

    frame.render_widget(Paragraph::new(feedback), chunks[1]);
}

fn draw_error_banner(frame: &mut Frame, error: &str, area: Rect) {
    let banner = Paragraph::new(error.to_string())
        .style(Style::default().fg(colors::ERROR).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::ERROR)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}

fn draw_url_list(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let list = &dashboard.list;
    let focused = app.focus == Focus::List;

    let title = if list.is_loading() {
        " My URLs (loading...) ".to_string()
    } else {
        format!(" My URLs ({}) ", list.len())
    };

    if list.is_empty() {
        let text = match list.status() {
            ListStatus::Loading => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Loading URLs...",
                    Style::default().fg(colors::WARNING).bold(),
                )),
            ],
            ListStatus::Error(message) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(colors::ERROR).bold(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(colors::MUTED)),
                    Span::styled("[r]", Style::default().fg(Color::Green).bold()),
                    Span::styled(" to retry", Style::default().fg(colors::MUTED)),
                ]),
            ],
            _ => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No URLs yet",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Start by creating your first short URL above.",
                    Style::default().fg(colors::MUTED),
                )),
            ],
        };

        let empty = Paragraph::new(text)
            .block(panel_block(&title, focused))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Span::styled("Code", Style::default().fg(Color::Yellow).bold()),
        Span::styled("Short URL", Style::default().fg(Color::Yellow).bold()),
        Span::styled("Original URL", Style::default().fg(Color::Yellow).bold()),
        Span::styled("Created", Style::default().fg(Color::Yellow).bold()),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = list
        .records()
        .iter()
        .map(|record| {
            Row::new(vec![
                Span::styled(record.code.clone(), Style::default().fg(Color::Cyan).bold()),
                Span::styled(record.short_url.clone(), Style::default().fg(Color::Green)),
                Span::styled(
                    truncate_display(&record.original_url, app.url_truncate_length),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(record.created_display(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Min(20),
            Constraint::Length(CREATED_COLUMN_WIDTH),
        ],
    )
    .header(header)
    .block(panel_block(&title, focused))
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    let mut state = TableState::default();
    if focused {
        state.select(list.selected_index());
    }

    frame.render_stateful_widget(table, area, &mut state);
}
