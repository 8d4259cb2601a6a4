//! 通用弹窗容器

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::PopupSize;

/// 居中弹窗：清除背景、画双线边框、返回内部区域
pub struct Popup<'a> {
    title: &'a str,
    color: Color,
    size: PopupSize,
    margin: Margin,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            color: Color::Cyan,
            size,
            margin: Margin::new(2, 1),
        }
    }

    /// 标题和边框颜色
    pub fn theme_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = centered_rect(self.size.width, self.size.height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title)
            .title_style(Style::default().fg(self.color).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.color));
        frame.render_widget(block, popup_area);

        popup_area.inner(self.margin)
    }
}

/// Rectangle of `percent_x` × `percent_y` centered in `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(column);
    area
}
