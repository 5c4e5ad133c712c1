//! 应用层 - 查询（读操作）
//!
//! 页面渲染与 TTS 代理都是无状态的读操作

mod page_queries;
mod speech_queries;

pub mod handlers;

pub use page_queries::*;
pub use speech_queries::*;
