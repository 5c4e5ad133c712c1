//! Page Query Handlers

use std::sync::Arc;

use crate::application::ports::{RenderError, ViewRendererPort};
use crate::application::queries::page_queries::{RenderPageQuery, RenderPageResponse};

/// RenderPage Handler - 将视图交给渲染器
pub struct RenderPageHandler {
    renderer: Arc<dyn ViewRendererPort>,
}

impl RenderPageHandler {
    pub fn new(renderer: Arc<dyn ViewRendererPort>) -> Self {
        Self { renderer }
    }

    pub async fn handle(&self, query: RenderPageQuery) -> Result<RenderPageResponse, RenderError> {
        tracing::debug!(template = query.view.template(), "Rendering page");

        let html = self.renderer.render(&query.view).await?;
        Ok(RenderPageResponse { html })
    }
}
