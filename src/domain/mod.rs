pub mod content;
pub mod conversation;
pub mod message;

pub use content::{GenInfo, Step, ToolCall};
pub use conversation::Conversation;
pub use message::{Message, MessageRole, Version, latest_content};
