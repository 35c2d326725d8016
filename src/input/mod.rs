pub mod loader;
pub mod models;

pub use loader::{LoadError, load_conversation, parse_conversation};
pub use models::{ConversationRecord, MessageRecord};
