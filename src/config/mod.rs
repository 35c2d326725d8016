pub mod settings;

pub use settings::{LogConfig, RenderConfig, Settings};
