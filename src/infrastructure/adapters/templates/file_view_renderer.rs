//! File View Renderer
//!
//! 从模板目录读取 HTML 文件，把 `{{ name }}` 占位符替换为转义后的参数值。
//! 未知占位符原样保留。

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::application::ports::{RenderError, ViewRendererPort};
use crate::domain::View;

/// 基于文件的渲染器
pub struct FileViewRenderer {
    templates_dir: PathBuf,
}

impl FileViewRenderer {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        let templates_dir = templates_dir.into();
        tracing::info!(dir = %templates_dir.display(), "FileViewRenderer initialized");
        Self { templates_dir }
    }
}

#[async_trait]
impl ViewRendererPort for FileViewRenderer {
    async fn render(&self, view: &View) -> Result<String, RenderError> {
        let template = view.template();
        let path = self.templates_dir.join(template);

        let source = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                RenderError::TemplateNotFound(template.to_string())
            } else {
                RenderError::Io {
                    template: template.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        Ok(fill_placeholders(&source, view.params()))
    }
}

/// 单次扫描模板，替换后的值不会再被当作占位符解析
fn fill_placeholders(source: &str, params: &BTreeMap<&'static str, String>) -> String {
    let mut html = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(open) = rest.find("{{") {
        html.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            html.push_str(&rest[open..]);
            return html;
        };

        let inner = &after_open[..close];
        if inner.contains("{{") {
            // 内部还有 `{{`，从下一个开标记重新匹配
            html.push_str("{{");
            rest = after_open;
            continue;
        }

        match params.get(inner.trim()) {
            Some(value) => html.push_str(&escape_html(value)),
            None => html.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    html.push_str(rest);
    html
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
