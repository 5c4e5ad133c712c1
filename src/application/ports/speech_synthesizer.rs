//! Speech Synthesizer Port - 外部 TTS 服务抽象
//!
//! 定义代理合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use thiserror::Error;

use crate::domain::SynthesisRequest;

/// 上游未声明 Content-Type 时使用的默认类型
pub const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 上游调用超时
    #[error("TTS generation timed out")]
    Timeout,

    /// 上游返回非 2xx 状态码
    #[error("TTS server error: {0}")]
    UpstreamStatus(u16),

    /// 上游以 JSON 形式返回（视为合成失败，不解析其内容）
    #[error("TTS server returned error")]
    UpstreamRejected,

    /// 其他错误（连接失败、响应异常等）
    #[error("{0}")]
    Network(String),
}

/// 音频字节流
pub type AudioStream = BoxStream<'static, Result<Bytes, TtsError>>;

/// 合成结果
pub struct SynthesizedAudio {
    /// 上游声明的 Content-Type
    pub content_type: String,
    /// 上游响应体
    pub stream: AudioStream,
}

impl std::fmt::Debug for SynthesizedAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesizedAudio")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Speech Synthesizer Port
///
/// 每次调用恰好发起一次上游请求，不重试，不缓存
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError>;
}
