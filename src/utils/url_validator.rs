//! URL 处理模块
//!
//! 提交前补全协议；校验服务地址

use url::Url;

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL is required"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Trim the input and prefix `https://` when no http(s) scheme is present.
///
/// Only emptiness is rejected; everything else is left for the service to
/// judge.
pub fn normalize_url(input: &str) -> Result<String, UrlValidationError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }
    if has_http_scheme(url) {
        Ok(url.to_string())
    } else {
        Ok(format!("https://{}", url))
    }
}

/// Validate the configured service base URL and strip the trailing slash
pub fn validate_base_url(input: &str) -> Result<String, UrlValidationError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if !has_http_scheme(url) {
        let proto = url
            .split(':')
            .next()
            .map(|s| format!("{}:", s.to_lowercase()))
            .unwrap_or_default();
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(url.trim_end_matches('/').to_string())
}
