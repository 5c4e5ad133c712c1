//! Synthesis Context - 语音合成请求
//!
//! 代理转发给外部 TTS 服务的请求描述

mod value_objects;

pub use value_objects::{
    Speed, SynthesisRequest, TtsServerUrl, DEFAULT_LANGUAGE, DEFAULT_SPEED, DEFAULT_STYLE,
};
