//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod templates;
pub mod tts;

pub use templates::*;
pub use tts::*;
