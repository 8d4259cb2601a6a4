//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 创建表单面板高度（输入框 + 结果区）
pub const FORM_PANEL_HEIGHT: u16 = 10;

/// 错误横幅高度
pub const ERROR_BANNER_HEIGHT: u16 = 3;

/// 创建时间列宽度 (`YYYY-MM-DD HH:MM:SS`)
pub const CREATED_COLUMN_WIDTH: u16 = 19;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 登录框
    pub const LOGIN: PopupSize = PopupSize::new(50, 60);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(80, 85);
    /// 删除确认弹窗
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(65, 45);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}
