//! Synthesis Context - Value Objects

use std::fmt;

/// 默认朗读风格
pub const DEFAULT_STYLE: &str = "default";

/// 默认语言
pub const DEFAULT_LANGUAGE: &str = "English";

/// 默认语速倍率
pub const DEFAULT_SPEED: f64 = 1.0;

/// TTS 服务地址
///
/// 构造时去掉一个末尾的 `/`，保证拼接出的 endpoint 与原值是否带斜杠无关
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsServerUrl(String);

impl TtsServerUrl {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        match url.strip_suffix('/') {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(url),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 合成接口地址
    pub fn synthesize_endpoint(&self) -> String {
        format!("{}/synthesize_speech/", self.0)
    }
}

impl fmt::Display for TtsServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 语速倍率
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed(f64);

impl Speed {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// 是否为默认语速（默认语速不转发给上游）
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_SPEED
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl fmt::Display for Speed {
    // 与上游约定的浮点文本格式: 2 -> "2.0", 1.25 -> "1.25", 1e20 -> "1e+20", 1e-5 -> "1e-05"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }

        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if value != 0.0 && !(-4..16).contains(&exponent) {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
        } else if value.fract() == 0.0 {
            write!(f, "{:.1}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

/// 语音合成请求
///
/// 每次代理调用临时构造，不持久化，不排队，不重试
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub server: TtsServerUrl,
    pub voice: String,
    pub text: String,
    pub style: String,
    pub language: String,
    pub speed: Speed,
}

impl SynthesisRequest {
    /// 使用默认 style / language / speed 创建请求
    pub fn new(server: impl Into<String>, voice: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            server: TtsServerUrl::new(server),
            voice: voice.into(),
            text: text.into(),
            style: DEFAULT_STYLE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            speed: Speed::default(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Speed::new(speed);
        self
    }

    /// 上游请求 URL
    pub fn endpoint(&self) -> String {
        self.server.synthesize_endpoint()
    }

    /// 上游请求的 query 参数，`speed` 仅在非默认值时出现
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("voice", self.voice.clone()),
            ("text", self.text.clone()),
            ("style", self.style.clone()),
            ("language", self.language.clone()),
        ];
        if !self.speed.is_default() {
            params.push(("speed", self.speed.to_string()));
        }
        params
    }
}
