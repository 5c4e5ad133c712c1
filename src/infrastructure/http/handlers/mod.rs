//! HTTP Handlers

mod pages;
mod ping;
mod tts_proxy;

pub use pages::*;
pub use ping::*;
pub use tts_proxy::*;
