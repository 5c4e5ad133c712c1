//! Speech Query Handlers

use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizerPort, SynthesizedAudio, TtsError};
use crate::application::queries::speech_queries::ProxySpeechQuery;

/// ProxySpeech Handler - 转发合成请求到外部 TTS 服务
pub struct ProxySpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl ProxySpeechHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(&self, query: ProxySpeechQuery) -> Result<SynthesizedAudio, TtsError> {
        let request = query.into_request();

        tracing::debug!(
            server = %request.server,
            voice = %request.voice,
            text_len = request.text.len(),
            "Proxying TTS request"
        );

        self.synthesizer.synthesize(request).await
    }
}
