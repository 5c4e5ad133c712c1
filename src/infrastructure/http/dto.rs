//! Data Transfer Objects

use serde::Deserialize;

use crate::application::ProxySpeechQuery;

// ============================================================================
// Page DTOs
// ============================================================================

/// `/agent/{agent_name}/conversation` 的 query 参数
#[derive(Debug, Default, Deserialize)]
pub struct ConversationParams {
    #[serde(default)]
    pub conversation_id: String,
}

/// `/agent/{agent_name}/workflows` 的 query 参数
#[derive(Debug, Default, Deserialize)]
pub struct WorkflowParams {
    #[serde(default)]
    pub workflow_id: String,
    #[serde(default)]
    pub node_id: String,
}

// ============================================================================
// TTS Proxy DTOs
// ============================================================================

/// `/api/tts-proxy` 的 query 参数
#[derive(Debug, Deserialize)]
pub struct TtsProxyParams {
    pub server: String,
    pub voice: String,
    pub text: String,
    pub style: Option<String>,
    pub language: Option<String>,
    pub speed: Option<f64>,
}

impl From<TtsProxyParams> for ProxySpeechQuery {
    fn from(params: TtsProxyParams) -> Self {
        Self {
            server: params.server,
            voice: params.voice,
            text: params.text,
            style: params.style,
            language: params.language,
            speed: params.speed,
        }
    }
}
