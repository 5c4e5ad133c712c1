//! HTTP Routes
//!
//! Pages:
//! - /                                     GET  agents.html
//! - /agent/:agent_name                    GET  agent_home.html
//! - /agent/:agent_name/conversations      GET  conversations.html
//! - /agent/:agent_name/conversation       GET  conversation.html  (?conversation_id)
//! - /agent/:agent_name/edit               GET  edit_agent.html
//! - /agent/:agent_name/workflows          GET  workflows.html     (?workflow_id, node_id)
//! - /settings /mcps /toolsets /skills /llms  GET  <name>.html
//!
//! API:
//! - /api/tts-proxy                        GET  代理到外部 TTS 服务
//! - /api/ping                             GET  健康检查
//!
//! Static:
//! - /static/*                             静态资源目录

use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(static_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .merge(page_routes())
        .merge(agent_routes())
        .nest("/api", api_routes())
        .nest_service("/static", ServeDir::new(static_dir))
}

/// 静态页面路由
fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/settings", get(handlers::settings))
        .route("/mcps", get(handlers::mcps))
        .route("/toolsets", get(handlers::toolsets))
        .route("/skills", get(handlers::skills))
        .route("/llms", get(handlers::llms))
}

/// Agent 页面路由
fn agent_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/agent/:agent_name", get(handlers::agent_home))
        .route("/agent/:agent_name/conversations", get(handlers::conversations))
        .route("/agent/:agent_name/conversation", get(handlers::conversation))
        .route("/agent/:agent_name/edit", get(handlers::edit_agent))
        .route("/agent/:agent_name/workflows", get(handlers::workflows))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tts-proxy", get(handlers::tts_proxy))
        .route("/ping", get(handlers::ping))
}
