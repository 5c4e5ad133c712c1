//! Template Adapter - 基于文件的页面渲染器

mod file_view_renderer;

pub use file_view_renderer::FileViewRenderer;
