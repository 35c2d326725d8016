use super::content::{GenInfo, Step, ToolCall};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }

    /// Human-facing label used in message headers
    pub fn label(&self) -> &str {
        match self {
            MessageRole::User => "User",
            MessageRole::Assistant => "Assistant",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Some(MessageRole::User),
            "assistant" => Some(MessageRole::Assistant),
            _ => None,
        }
    }
}

/// A snapshot of a message's content from its edit history
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Version {
    pub content: String,
    pub timestamp: Option<f64>,
}

impl Version {
    pub fn new(content: impl Into<String>) -> Self {
        Version {
            content: content.into(),
            timestamp: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: Option<String>,
    pub versions: Vec<Version>,
    pub steps: Vec<Step>,
    pub gen_info: Option<GenInfo>,
    pub tool_calls: Vec<ToolCall>,
    pub timestamp: Option<f64>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Message {
            role,
            content: Some(content.into()),
            versions: Vec::new(),
            steps: Vec::new(),
            gen_info: None,
            tool_calls: Vec::new(),
            timestamp: None,
        }
    }

    /// The text to display for this message
    pub fn text(&self) -> String {
        latest_content(&self.versions, self.content.as_deref())
    }
}

/// Resolve the authoritative text of a message.
///
/// The last version in sequence order wins. With no versions the direct
/// `content` is used, and with neither the text is empty.
pub fn latest_content(versions: &[Version], content: Option<&str>) -> String {
    match versions.last() {
        Some(version) => version.content.clone(),
        None => content.unwrap_or_default().to_string(),
    }
}
