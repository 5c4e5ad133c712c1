//! Page Handlers
//!
//! 每个路由只负责取出 path/query 参数，渲染交给 RenderPageHandler

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::application::RenderPageQuery;
use crate::domain::{Page, View};
use crate::infrastructure::http::dto::{ConversationParams, WorkflowParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

async fn render(state: &AppState, view: View) -> Result<Html<String>, ApiError> {
    let response = state
        .render_page_handler
        .handle(RenderPageQuery { view })
        .await?;
    Ok(Html(response.html))
}

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, View::new(Page::Agents)).await
}

pub async fn agent_home(
    State(state): State<Arc<AppState>>,
    Path(agent_name): Path<String>,
) -> Result<Html<String>, ApiError> {
    render(&state, View::new(Page::AgentHome).with_param("agent_name", agent_name)).await
}

pub async fn conversations(
    State(state): State<Arc<AppState>>,
    Path(agent_name): Path<String>,
) -> Result<Html<String>, ApiError> {
    render(
        &state,
        View::new(Page::Conversations).with_param("agent_name", agent_name),
    )
    .await
}

pub async fn conversation(
    State(state): State<Arc<AppState>>,
    Path(agent_name): Path<String>,
    Query(params): Query<ConversationParams>,
) -> Result<Html<String>, ApiError> {
    let view = View::new(Page::Conversation)
        .with_param("agent_name", agent_name)
        .with_param("conversation_id", params.conversation_id);
    render(&state, view).await
}

pub async fn edit_agent(
    State(state): State<Arc<AppState>>,
    Path(agent_name): Path<String>,
) -> Result<Html<String>, ApiError> {
    render(&state, View::new(Page::EditAgent).with_param("agent_name", agent_name)).await
}

pub async fn workflows(
    State(state): State<Arc<AppState>>,
    Path(agent_name): Path<String>,
    Query(params): Query<WorkflowParams>,
) -> Result<Html<String>, ApiError> {
    let view = View::new(Page::Workflows)
        .with_param("agent_name", agent_name)
        .with_param("workflow_id", params.workflow_id)
        .with_param("node_id", params.node_id);
    render(&state, view).await
}

pub async fn settings(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, View::new(Page::Settings)).await
}

pub async fn mcps(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, View::new(Page::Mcps)).await
}

pub async fn toolsets(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, View::new(Page::Toolsets)).await
}

pub async fn skills(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, View::new(Page::Skills)).await
}

pub async fn llms(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, View::new(Page::Llms)).await
}
