use super::message::Message;

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub name: String,
    /// Epoch seconds or milliseconds, as written by the exporter
    pub created_at: Option<f64>,
    pub token_count: u64,
    pub system_prompt: Option<String>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(name: impl Into<String>, created_at: f64, token_count: u64) -> Self {
        Conversation {
            name: name.into(),
            created_at: Some(created_at),
            token_count,
            system_prompt: None,
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt
            .as_deref()
            .filter(|prompt| !prompt.trim().is_empty())
    }
}
