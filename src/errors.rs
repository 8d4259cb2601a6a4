use std::fmt;

/// Generic fallback used when an error response carries no readable body.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
pub const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Structured `{error, code}` body returned by the service
    Api { code: String, message: String },
    Network(String),
    Parse(String),
    Validation(String),
    Config(String),
    Clipboard(String),
    Io(String),
}

impl ClientError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Api { .. } => "E101",
            ClientError::Network(_) => "E102",
            ClientError::Parse(_) => "E103",
            ClientError::Validation(_) => "E104",
            ClientError::Config(_) => "E105",
            ClientError::Clipboard(_) => "E106",
            ClientError::Io(_) => "E107",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Api { .. } => "Service Error",
            ClientError::Network(_) => "Network Error",
            ClientError::Parse(_) => "Response Parse Error",
            ClientError::Validation(_) => "Validation Error",
            ClientError::Config(_) => "Configuration Error",
            ClientError::Clipboard(_) => "Clipboard Error",
            ClientError::Io(_) => "I/O Error",
        }
    }

    /// The single human-readable message shown to the user
    pub fn message(&self) -> &str {
        match self {
            ClientError::Api { message, .. } => message,
            ClientError::Network(msg) => msg,
            ClientError::Parse(msg) => msg,
            ClientError::Validation(msg) => msg,
            ClientError::Config(msg) => msg,
            ClientError::Clipboard(msg) => msg,
            ClientError::Io(msg) => msg,
        }
    }

    /// Service-side error code (`NOT_FOUND`, `NETWORK_ERROR`, ...), if any
    pub fn api_code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ClientError {}

// 便捷的构造函数
impl ClientError {
    pub fn api<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        ClientError::Api {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The generic shape used when an error body cannot be read
    pub fn network_fallback() -> Self {
        ClientError::api(NETWORK_ERROR_CODE, NETWORK_ERROR_MESSAGE)
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        ClientError::Network(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        ClientError::Parse(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ClientError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ClientError::Config(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ClientError::Clipboard(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        ClientError::Io(msg.into())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
