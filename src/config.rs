use std::path::Path;
use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;
use thiserror::Error;

/// 保存 bot token 的环境变量
pub const TOKEN_ENV: &str = "BOT_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN environment variable is missing")]
    MissingToken,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 日志等级
    pub log_level: String,
    pub gecko: Gecko,
    /// bot token，只从环境变量读取
    #[serde(skip)]
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Gecko {
    /// GeckoTerminal API 地址
    pub api_url: String,
    /// 链名称
    pub network: String,
    /// 池子地址
    pub pool: String,
    /// 请求超时
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self { log_level: "info".to_owned(), gecko: Gecko::default(), token: String::new() }
    }
}

impl Default for Gecko {
    fn default() -> Self {
        Self {
            api_url: "https://api.geckoterminal.com/api/v2".to_owned(),
            network: "base".to_owned(),
            pool: "0xae6dcae099c4c3e714cb7a2a42e71d0be3f24520".to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl Gecko {
    /// 池子详情接口的完整 URL
    pub fn pool_url(&self) -> String {
        format!(
            "{}/networks/{}/pools/{}",
            self.api_url.trim_end_matches('/'),
            self.network,
            self.pool
        )
    }
}

impl Config {
    /// 读取配置文件，文件不存在时使用默认配置；token 为空视为缺失
    pub fn new(path: impl AsRef<Path>, token: Option<String>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = if path.exists() { std::fs::read_to_string(path)? } else { String::new() };
        Self::from_toml(&s, token)
    }

    pub fn from_toml(s: &str, token: Option<String>) -> Result<Self, ConfigError> {
        let token = token.filter(|t| !t.trim().is_empty()).ok_or(ConfigError::MissingToken)?;
        let mut config: Config = toml::from_str(s)?;
        config.token = token;
        Ok(config)
    }
}
