//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod speech_synthesizer;
mod view_renderer;

pub use speech_synthesizer::{
    AudioStream, SpeechSynthesizerPort, SynthesizedAudio, TtsError, DEFAULT_AUDIO_CONTENT_TYPE,
};
pub use view_renderer::{RenderError, ViewRendererPort};
