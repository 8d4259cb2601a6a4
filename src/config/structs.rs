use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, Result};
use crate::utils::validate_base_url;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tinyurl.toml";
/// Prefix for environment overrides, e.g. `TINYURL__API__BASE_URL`
pub const ENV_PREFIX: &str = "TINYURL";

/// 客户端配置
///
/// 优先级：命令行 > ENV > 配置文件 > 默认值
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl ClientConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`load`](Self::load), but `TINYURL__*` overrides come from
    /// `env` instead of the process environment when it is `Some`
    pub fn load_with_env(
        path: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_FILE, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validated()
    }

    /// Normalize and check values that would otherwise fail later at request time
    pub fn validated(mut self) -> Result<Self> {
        self.api.base_url = validate_base_url(&self.api.base_url)
            .map_err(|e| ClientError::config(format!("api.base_url: {}", e)))?;
        if self.api.timeout_secs == 0 {
            return Err(ClientError::config("api.timeout_secs must be greater than 0"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ClientError::config(format!(
                "logging.format: expected \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(self)
    }

    /// Apply the `--api-url` command line override
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Result<Self> {
        if let Some(url) = api_url {
            self.api.base_url = validate_base_url(url)
                .map_err(|e| ClientError::config(format!("--api-url: {}", e)))?;
        }
        Ok(self)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("# Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ClientError::config(format!("serialize config: {}", e)))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 终端界面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_url_truncate_length")]
    pub url_truncate_length: usize,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_url_truncate_length() -> usize {
    50
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            url_truncate_length: default_url_truncate_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
        assert_eq!(config.ui.url_truncate_length, 50);
    }

    #[test]
    fn test_validated_trims_trailing_slash() {
        let mut config = ClientConfig::default();
        config.api.base_url = "https://sho.rt/".into();
        let config = config.validated().unwrap();
        assert_eq!(config.api.base_url, "https://sho.rt");
    }

    #[test]
    fn test_validated_rejects_bad_values() {
        let mut config = ClientConfig::default();
        config.api.base_url = "sho.rt".into();
        assert!(matches!(config.validated(), Err(ClientError::Config(_))));

        let mut config = ClientConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validated().is_err());

        let mut config = ClientConfig::default();
        config.logging.format = "xml".into();
        assert!(config.validated().is_err());
    }

    #[test]
    fn test_api_url_override() {
        let config = ClientConfig::default()
            .with_api_url(Some("http://127.0.0.1:9999/"))
            .unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9999");

        let config = ClientConfig::default().with_api_url(None).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = ClientConfig::generate_sample_config();
        assert!(sample.contains("[api]"));
        let parsed: ClientConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.api.base_url, "http://localhost:8080");
    }
}
