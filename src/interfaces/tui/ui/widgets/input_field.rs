//! 通用输入框组件
//!
//! 激活状态高亮、错误行、长度提示

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("User ID", &app.login.input)
///     .active(true)
///     .max_chars(6)
///     .error(app.login.error())
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
    max_chars: Option<usize>,
    disabled: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            max_chars: None,
            disabled: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// 输入为空时显示的提示
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 在标题中显示 `n/max`
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// 提交中不可编辑
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// 计算所需的高度（输入框 + 错误行）
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        let count = self.value.chars().count();
        match self.max_chars {
            Some(max) => format!("{} ({}/{})", self.title, count, max),
            None => self.title.to_string(),
        }
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(colors::MUTED)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn body(&self) -> Paragraph<'a> {
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => {
                Paragraph::new(placeholder).style(Style::default().fg(colors::MUTED))
            }
            _ => {
                let mut text = self.value.to_string();
                if self.is_active && !self.disabled {
                    text.push('_');
                }
                Paragraph::new(text)
            }
        }
    }

    /// 渲染输入框
    ///
    /// `area` 的高度应为 [`height`](Self::height) 的返回值
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = self.body().block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}
