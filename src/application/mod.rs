//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesizer、ViewRenderer）
//! - queries: 查询及处理器（页面渲染、TTS 代理）

pub mod ports;
pub mod queries;

// Re-exports
pub use queries::{
    handlers::{ProxySpeechHandler, RenderPageHandler},
    ProxySpeechQuery, RenderPageQuery, RenderPageResponse,
};

pub use ports::{
    RenderError, SpeechSynthesizerPort, SynthesizedAudio, TtsError, ViewRendererPort,
};
