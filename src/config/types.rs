//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 模板与静态资源目录
    #[serde(default)]
    pub web: WebConfig,

    /// TTS 代理配置
    #[serde(default)]
    pub tts_proxy: TtsProxyConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Web 资源配置
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// HTML 模板目录
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// 静态文件目录（挂载在 /static）
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("app/templates")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            static_dir: default_static_dir(),
        }
    }
}

/// TTS 代理配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsProxyConfig {
    /// 上游调用超时（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_timeout() -> u64 {
    300 // 5 分钟，长文本生成较慢
}

impl Default for TtsProxyConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_tts_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
