//! HTTP Error Handling
//!
//! 所有失败统一返回 `{"error": <message>}`，HTTP 状态码反映失败类别

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{RenderError, TtsError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求参数缺失或类型错误
    UnprocessableEntity(String),
    Internal(String),
    GatewayTimeout(String),
    /// 透传上游状态码
    Upstream { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream { status, .. } => *status,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::UnprocessableEntity(msg)
            | ApiError::Internal(msg)
            | ApiError::GatewayTimeout(msg)
            | ApiError::Upstream { message: msg, .. } => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.message(), "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.message(), "Request rejected");
        }

        let body = match self {
            ApiError::UnprocessableEntity(msg)
            | ApiError::Internal(msg)
            | ApiError::GatewayTimeout(msg)
            | ApiError::Upstream { message: msg, .. } => ErrorResponse::new(msg),
        };

        (status, Json(body)).into_response()
    }
}

impl From<TtsError> for ApiError {
    fn from(e: TtsError) -> Self {
        match e {
            TtsError::Timeout => ApiError::GatewayTimeout(e.to_string()),
            TtsError::UpstreamStatus(code) => ApiError::Upstream {
                status: StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                message: e.to_string(),
            },
            TtsError::UpstreamRejected => ApiError::Internal(e.to_string()),
            TtsError::Network(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
