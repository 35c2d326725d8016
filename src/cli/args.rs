use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;
use crate::services::default_output_path;

#[derive(Parser, Debug)]
#[command(
    name = "chat-html",
    version,
    about = "Render an exported chat conversation as a static HTML page"
)]
pub struct CliArgs {
    /// Conversation export (JSON)
    #[arg(index = 1, value_name = "INPUT")]
    pub input: PathBuf,
    /// Destination file; defaults to <INPUT stem>_chat.html next to the input
    #[arg(index = 2, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
    /// Page title, overrides CHAT_HTML_TITLE
    #[arg(long)]
    pub title: Option<String>,
    /// Footer text, overrides CHAT_HTML_FOOTER
    #[arg(long)]
    pub footer: Option<String>,
}

impl CliArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// Fold command line overrides into settings loaded from the environment
    pub fn apply(&self, settings: &mut Settings) -> Result<(), String> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err("--title must not be empty".to_string());
            }
            settings.render.title = title.clone();
        }
        if let Some(footer) = &self.footer {
            settings.render.footer = footer.clone();
        }
        Ok(())
    }
}
