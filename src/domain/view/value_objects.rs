//! View Context - Value Objects

use std::collections::BTreeMap;

/// 站点页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Agents,
    AgentHome,
    Conversations,
    Conversation,
    EditAgent,
    Workflows,
    Settings,
    Mcps,
    Toolsets,
    Skills,
    Llms,
}

impl Page {
    /// 对应的模板文件名
    pub fn template(&self) -> &'static str {
        match self {
            Self::Agents => "agents.html",
            Self::AgentHome => "agent_home.html",
            Self::Conversations => "conversations.html",
            Self::Conversation => "conversation.html",
            Self::EditAgent => "edit_agent.html",
            Self::Workflows => "workflows.html",
            Self::Settings => "settings.html",
            Self::Mcps => "mcps.html",
            Self::Toolsets => "toolsets.html",
            Self::Skills => "skills.html",
            Self::Llms => "llms.html",
        }
    }
}

/// 待渲染的视图：页面 + 参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    page: Page,
    params: BTreeMap<&'static str, String>,
}

impl View {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.insert(name, value.into());
        self
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn template(&self) -> &'static str {
        self.page.template()
    }

    pub fn params(&self) -> &BTreeMap<&'static str, String> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
