use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::RenderConfig;
use crate::domain::Conversation;
use crate::input::{LoadError, load_conversation};
use crate::output::{WriteError, write_document};
use crate::render::Renderer;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub message_count: usize,
    pub bytes: usize,
}

pub struct ExportService {
    renderer: Renderer,
}

impl ExportService {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: Renderer::new(config),
        }
    }

    /// Render an already loaded conversation
    pub fn render(&self, conversation: &Conversation) -> String {
        self.renderer.render(conversation)
    }

    /// Run the whole pipeline: load, render, then write the finished document
    pub fn export(&self, input: &Path, output: &Path) -> Result<ExportSummary, ExportError> {
        let conversation = load_conversation(input)?;
        let html = self.render(&conversation);

        // Nothing is written until the document is complete
        write_document(output, &html)?;

        Ok(ExportSummary {
            output: output.to_path_buf(),
            message_count: conversation.messages.len(),
            bytes: html.len(),
        })
    }
}

/// `<input without extension>_chat.html`, next to the input file
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "conversation".to_string());
    input.with_file_name(format!("{}_chat.html", stem))
}
