pub mod document;
pub mod message;
pub mod styles;

pub use document::Renderer;
pub use message::render_message;
