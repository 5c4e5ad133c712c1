//! Speech Queries - TTS 代理查询

use crate::domain::SynthesisRequest;

/// 代理合成查询
///
/// 可选字段缺省时使用领域默认值
#[derive(Debug, Clone)]
pub struct ProxySpeechQuery {
    pub server: String,
    pub voice: String,
    pub text: String,
    pub style: Option<String>,
    pub language: Option<String>,
    pub speed: Option<f64>,
}

impl ProxySpeechQuery {
    /// 转换为领域请求
    pub fn into_request(self) -> SynthesisRequest {
        let mut request = SynthesisRequest::new(self.server, self.voice, self.text);
        if let Some(style) = self.style {
            request = request.with_style(style);
        }
        if let Some(language) = self.language {
            request = request.with_language(language);
        }
        if let Some(speed) = self.speed {
            request = request.with_speed(speed);
        }
        request
    }
}
