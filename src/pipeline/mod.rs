pub mod chat;

pub use chat::{run_chat, validate_messages, ChatRequest};
