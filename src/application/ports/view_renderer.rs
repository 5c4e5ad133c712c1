//! View Renderer Port - 页面渲染抽象

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::View;

/// 渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Failed to read template {template}: {message}")]
    Io { template: String, message: String },
}

/// View Renderer Port
#[async_trait]
pub trait ViewRendererPort: Send + Sync {
    /// 渲染视图为 HTML
    async fn render(&self, view: &View) -> Result<String, RenderError>;
}
