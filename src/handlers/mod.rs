//! HTTP request handlers.

mod chat;
mod health;

pub use chat::{chat, chat_stream};
pub use health::{health, root};
