//! View Context - 页面视图
//!
//! 路由 -> 模板名 + 参数，参数原样透传给渲染器

mod value_objects;

pub use value_objects::{Page, View};
