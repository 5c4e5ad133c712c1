//! Query Handlers 实现

mod page_handlers;
mod speech_handlers;

pub use page_handlers::*;
pub use speech_handlers::*;
