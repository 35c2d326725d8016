use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::Conversation;

use super::models::ConversationRecord;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid conversation JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid conversation data: {0}")]
    InvalidData(String),
}

/// Read and parse an exported conversation file
pub fn load_conversation(path: &Path) -> Result<Conversation, LoadError> {
    tracing::info!("Loading conversation from {}", path.display());

    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_from(&raw, &path.display().to_string())
}

/// Parse an exported conversation already held in memory
pub fn parse_conversation(json: &str) -> Result<Conversation, LoadError> {
    parse_from(json, "input")
}

fn parse_from(json: &str, origin: &str) -> Result<Conversation, LoadError> {
    let record: ConversationRecord =
        serde_json::from_str(json).map_err(|source| LoadError::Json {
            origin: origin.to_string(),
            source,
        })?;

    let conversation = record.to_conversation().map_err(LoadError::InvalidData)?;

    tracing::debug!(
        name = %conversation.name,
        messages = conversation.messages.len(),
        "Conversation parsed"
    );

    Ok(conversation)
}
