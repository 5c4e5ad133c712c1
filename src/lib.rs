//! Serendipity Web - Agent 管理界面服务端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Synthesis Context: TTS 代理请求
//! - View Context: 页面与视图参数
//!
//! 应用层 (application/):
//! - Ports: SpeechSynthesizer, ViewRenderer
//! - Queries: 页面渲染、TTS 代理
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 页面路由 + /api/tts-proxy + 静态资源
//! - Adapters: HTTP TTS Client, 文件模板渲染器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{load_config, AppConfig};
