//! TTS Proxy Handler
//!
//! GET /api/tts-proxy?server=..&voice=..&text=..[&style=..&language=..&speed=..]
//!
//! 成功时流式返回上游音频；失败时返回 `{"error": ..}`，状态码见 ApiError

use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::infrastructure::http::dto::TtsProxyParams;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn tts_proxy(
    State(state): State<Arc<AppState>>,
    params: Result<Query<TtsProxyParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;

    let audio = state.proxy_speech_handler.handle(params.into()).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, audio.content_type)
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(audio.stream))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
