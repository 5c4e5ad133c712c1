//! Application State
//!
//! 只读，请求之间不共享可变状态

use std::sync::Arc;

use crate::application::{
    ProxySpeechHandler, RenderPageHandler, SpeechSynthesizerPort, ViewRendererPort,
};

/// 应用状态
pub struct AppState {
    pub render_page_handler: RenderPageHandler,
    pub proxy_speech_handler: ProxySpeechHandler,
}

impl AppState {
    pub fn new(
        renderer: Arc<dyn ViewRendererPort>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
    ) -> Self {
        Self {
            render_page_handler: RenderPageHandler::new(renderer),
            proxy_speech_handler: ProxySpeechHandler::new(synthesizer),
        }
    }
}
