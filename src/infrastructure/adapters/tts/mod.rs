//! TTS Adapter - HTTP TTS 代理客户端实现

mod http_tts_client;

pub use http_tts_client::*;
