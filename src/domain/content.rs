use serde_json::Value;

/// One fragment of the assistant's intermediate reasoning
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub text: String,
    /// Caption supplied by the exporter, e.g. "Thought for 3.2 seconds"
    pub title: Option<String>,
}

impl Step {
    pub fn new(text: impl Into<String>) -> Self {
        Step {
            text: text.into(),
            title: None,
        }
    }
}

/// Generation statistics attached to an assistant message
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenInfo {
    pub stop_reason: Option<String>,
    pub tokens_per_second: Option<f64>,
    pub time_to_first_token_sec: Option<f64>,
    pub total_time_sec: Option<f64>,
    pub prompt_tokens_count: Option<f64>,
    pub predicted_tokens_count: Option<f64>,
    pub total_tokens_count: Option<f64>,
}

impl GenInfo {
    pub fn is_empty(&self) -> bool {
        self.stop_reason.is_none()
            && self.tokens_per_second.is_none()
            && self.time_to_first_token_sec.is_none()
            && self.total_time_sec.is_none()
            && self.prompt_tokens_count.is_none()
            && self.predicted_tokens_count.is_none()
            && self.total_tokens_count.is_none()
    }
}

/// A function invocation made while generating a message
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolCall {
    pub name: Option<String>,
    pub arguments: Option<Value>,
    pub result: Option<Value>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        ToolCall {
            name: Some(name.into()),
            arguments: Some(arguments),
            result: None,
        }
    }
}
