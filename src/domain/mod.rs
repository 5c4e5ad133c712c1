//! Domain Layer - 领域层
//!
//! 包含两个上下文:
//! - Synthesis Context: TTS 代理请求
//! - View Context: 页面路由与视图参数

pub mod synthesis;
pub mod view;

pub use synthesis::SynthesisRequest;
pub use view::{Page, View};
