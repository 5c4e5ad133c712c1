//! Page Queries - 页面渲染查询

use crate::domain::View;

/// 渲染页面查询
#[derive(Debug, Clone)]
pub struct RenderPageQuery {
    pub view: View,
}

/// 渲染结果
#[derive(Debug, Clone)]
pub struct RenderPageResponse {
    pub html: String,
}
