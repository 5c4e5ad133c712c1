//! HTTP TTS Client - 代理调用外部 TTS HTTP 服务
//!
//! 实现 SpeechSynthesizerPort trait，每次调用向请求中指定的 TTS 服务发起一次 GET
//!
//! 外部 TTS API:
//! GET {server}/synthesize_speech/?voice=..&text=..&style=..&language=..[&speed=..]
//! Response: 音频二进制（Content-Type 由上游声明），失败时可能返回 JSON

use async_trait::async_trait;
use futures_util::StreamExt;
use http::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{
    SpeechSynthesizerPort, SynthesizedAudio, TtsError, DEFAULT_AUDIO_CONTENT_TYPE,
};
use crate::domain::SynthesisRequest;

/// 默认超时：语音生成可能很慢
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// 单次上游调用的超时上限
    pub timeout: Duration,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpTtsClientConfig {
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(secs),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP TTS 客户端
///
/// 目标地址来自每个请求，本身不绑定某个 TTS 服务
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TtsError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, TtsError> {
        Self::new(HttpTtsClientConfig::default())
    }
}

fn map_request_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else {
        TtsError::Network(e.to_string())
    }
}

#[async_trait]
impl SpeechSynthesizerPort for HttpTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        let url = request.endpoint();
        let params = request.query_params();

        tracing::debug!(
            url = %url,
            voice = %request.voice,
            text_len = request.text.len(),
            speed = %request.speed,
            "Sending TTS synthesize request"
        );

        let response = self
            .client
            .get(&url)
            .query(&params)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::UpstreamStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_else(|| DEFAULT_AUDIO_CONTENT_TYPE.to_string());

        // 上游以 JSON 响应表示合成失败，内容不透传
        if content_type.contains("json") {
            return Err(TtsError::UpstreamRejected);
        }

        tracing::info!(
            url = %url,
            content_type = %content_type,
            content_length = ?response.content_length(),
            "Relaying TTS audio stream"
        );

        let stream = response.bytes_stream().map(|chunk| chunk.map_err(map_request_error));

        Ok(SynthesizedAudio {
            content_type,
            stream: stream.boxed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{collect_stream, spawn_fake_tts, unused_local_url, FakeTts};

    fn client_with_timeout(timeout: Duration) -> HttpTtsClient {
        HttpTtsClient::new(HttpTtsClientConfig::default().with_timeout(timeout)).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = HttpTtsClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsClientConfig::with_timeout_secs(60);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_success_relays_body_and_content_type() {
        let fake = FakeTts::audio("audio/wav", b"RIFF....WAVE");
        let base_url = spawn_fake_tts(fake.clone()).await;
        let client = HttpTtsClient::with_default_config().unwrap();

        let audio = client
            .synthesize(SynthesisRequest::new(format!("{}/", base_url), "v1", "hi"))
            .await
            .unwrap();

        assert_eq!(audio.content_type, "audio/wav");
        assert_eq!(collect_stream(audio.stream).await, b"RIFF....WAVE".to_vec());

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("voice").map(String::as_str), Some("v1"));
        assert_eq!(calls[0].get("text").map(String::as_str), Some("hi"));
        assert_eq!(calls[0].get("style").map(String::as_str), Some("default"));
        assert_eq!(calls[0].get("language").map(String::as_str), Some("English"));
        assert!(!calls[0].contains_key("speed"));
    }

    #[tokio::test]
    async fn test_custom_speed_is_sent_upstream() {
        let fake = FakeTts::audio("audio/mpeg", b"ID3");
        let base_url = spawn_fake_tts(fake.clone()).await;
        let client = HttpTtsClient::with_default_config().unwrap();

        let request = SynthesisRequest::new(base_url, "v1", "hola")
            .with_language("Spanish")
            .with_speed(1.5);
        client.synthesize(request).await.unwrap();

        let calls = fake.calls();
        assert_eq!(calls[0].get("speed").map(String::as_str), Some("1.5"));
        assert_eq!(calls[0].get("language").map(String::as_str), Some("Spanish"));
    }

    #[tokio::test]
    async fn test_missing_content_type_defaults_to_wav() {
        let fake = FakeTts::untyped(b"raw-bytes");
        let base_url = spawn_fake_tts(fake).await;
        let client = HttpTtsClient::with_default_config().unwrap();

        let audio = client
            .synthesize(SynthesisRequest::new(base_url, "v1", "hi"))
            .await
            .unwrap();

        assert_eq!(audio.content_type, DEFAULT_AUDIO_CONTENT_TYPE);
        assert_eq!(collect_stream(audio.stream).await, b"raw-bytes".to_vec());
    }

    #[tokio::test]
    async fn test_json_content_type_is_rejected() {
        let fake = FakeTts::audio("application/json", br#"{"detail":"voice missing"}"#);
        let base_url = spawn_fake_tts(fake).await;
        let client = HttpTtsClient::with_default_config().unwrap();

        let result = client
            .synthesize(SynthesisRequest::new(base_url, "v1", "hi"))
            .await;

        assert!(matches!(result, Err(TtsError::UpstreamRejected)));
    }

    #[tokio::test]
    async fn test_non_ascii_json_content_type_is_rejected() {
        let fake = FakeTts::audio("application/json; name=résumé", br#"{"detail":"bad"}"#);
        let base_url = spawn_fake_tts(fake).await;
        let client = HttpTtsClient::with_default_config().unwrap();

        let result = client
            .synthesize(SynthesisRequest::new(base_url, "v1", "hi"))
            .await;

        assert!(matches!(result, Err(TtsError::UpstreamRejected)));
    }

    #[tokio::test]
    async fn test_non_ascii_audio_content_type_is_kept() {
        let fake = FakeTts::audio("audio/wav; name=café", b"RIFF");
        let base_url = spawn_fake_tts(fake).await;
        let client = HttpTtsClient::with_default_config().unwrap();

        let audio = client
            .synthesize(SynthesisRequest::new(base_url, "v1", "hi"))
            .await
            .unwrap();

        assert_eq!(audio.content_type, "audio/wav; name=café");
    }

    #[tokio::test]
    async fn test_upstream_status_is_reported() {
        let fake = FakeTts::status(503);
        let base_url = spawn_fake_tts(fake).await;
        let client = HttpTtsClient::with_default_config().unwrap();

        let result = client
            .synthesize(SynthesisRequest::new(base_url, "v1", "hi"))
            .await;

        match result {
            Err(TtsError::UpstreamStatus(code)) => assert_eq!(code, 503),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let fake = FakeTts::slow(Duration::from_secs(5));
        let base_url = spawn_fake_tts(fake).await;
        let client = client_with_timeout(Duration::from_millis(100));

        let result = client
            .synthesize(SynthesisRequest::new(base_url, "v1", "hi"))
            .await;

        assert!(matches!(result, Err(TtsError::Timeout)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let base_url = unused_local_url().await;
        let client = HttpTtsClient::with_default_config().unwrap();

        let result = client
            .synthesize(SynthesisRequest::new(base_url, "v1", "hi"))
            .await;

        match result {
            Err(TtsError::Network(message)) => assert!(!message.is_empty()),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
