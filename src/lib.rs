pub mod cli;
pub mod config;
pub mod domain;
pub mod input;
pub mod output;
pub mod render;
pub mod services;
pub mod utils;

pub use config::Settings;
pub use domain::Conversation;
pub use input::{load_conversation, parse_conversation};
pub use render::Renderer;
pub use services::ExportService;
