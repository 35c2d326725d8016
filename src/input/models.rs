use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Conversation, GenInfo, Message, MessageRole, Step, ToolCall, Version};
use crate::utils::lenient;

// Top-level export record. Only these four keys are mandatory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    pub name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub created_at: Option<f64>,
    pub token_count: u64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub system_prompt: Option<String>,
    pub messages: Vec<MessageRecord>,
}

impl ConversationRecord {
    pub fn to_conversation(self) -> Result<Conversation, String> {
        let messages = self
            .messages
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.to_message(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Conversation {
            name: self.name,
            created_at: self.created_at,
            token_count: self.token_count,
            system_prompt: self.system_prompt,
            messages,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MessageRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub content: Option<ContentRecord>,
    #[serde(deserialize_with = "lenient::number")]
    pub timestamp: Option<f64>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub versions: Vec<VersionRecord>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub steps: Vec<StepRecord>,
    #[serde(rename = "genInfo", deserialize_with = "lenient::optional")]
    pub gen_info: Option<GenInfoRecord>,
    #[serde(alias = "toolCalls", deserialize_with = "lenient::sequence")]
    pub tool_calls: Vec<ToolCallRecord>,
}

impl MessageRecord {
    /// Convert into a domain message, filling gaps from the latest version
    pub fn to_message(self, index: usize) -> Result<Message, String> {
        let mut versions = Vec::with_capacity(self.versions.len());
        let mut latest = VersionExtras::default();
        for record in self.versions {
            let (version, extras) = record.into_parts();
            versions.push(version);
            latest = extras;
        }

        let role_name = self
            .role
            .or(latest.role)
            .ok_or_else(|| format!("Message {} has no role", index))?;
        let role = MessageRole::parse(&role_name)
            .ok_or_else(|| format!("Message {} has unsupported role '{}'", index, role_name))?;

        let own = split_steps(self.steps);
        let content = self.content.and_then(|c| c.to_text()).or(own.response);

        let steps = if own.thinking.is_empty() {
            latest.steps
        } else {
            own.thinking
        };

        let tool_calls: Vec<ToolCall> = if self.tool_calls.is_empty() {
            latest.tool_calls
        } else {
            self.tool_calls.into_iter().map(ToolCallRecord::to_tool_call).collect()
        };

        Ok(Message {
            role,
            content,
            versions,
            steps,
            gen_info: self
                .gen_info
                .map(GenInfo::from)
                .or(own.gen_info)
                .or(latest.gen_info),
            tool_calls,
            timestamp: self.timestamp.or(latest.timestamp),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VersionRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub content: Option<ContentRecord>,
    #[serde(deserialize_with = "lenient::number")]
    pub timestamp: Option<f64>,
    #[serde(deserialize_with = "lenient::optional")]
    pub preprocessed: Option<PreprocessedRecord>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub steps: Vec<StepRecord>,
    #[serde(rename = "genInfo", deserialize_with = "lenient::optional")]
    pub gen_info: Option<GenInfoRecord>,
    #[serde(alias = "toolCalls", deserialize_with = "lenient::sequence")]
    pub tool_calls: Vec<ToolCallRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreprocessedRecord {
    #[serde(deserialize_with = "lenient::number")]
    pub timestamp: Option<f64>,
}

// Fields of the latest version that back-fill the message itself
#[derive(Debug, Default)]
struct VersionExtras {
    role: Option<String>,
    timestamp: Option<f64>,
    steps: Vec<Step>,
    gen_info: Option<GenInfo>,
    tool_calls: Vec<ToolCall>,
}

impl VersionRecord {
    fn into_parts(self) -> (Version, VersionExtras) {
        let split = split_steps(self.steps);
        let timestamp = self
            .timestamp
            .or(self.preprocessed.and_then(|p| p.timestamp));

        let version = Version {
            content: self
                .content
                .and_then(|c| c.to_text())
                .or(split.response)
                .unwrap_or_default(),
            timestamp,
        };

        let extras = VersionExtras {
            role: self.role,
            timestamp,
            steps: split.thinking,
            gen_info: self.gen_info.map(GenInfo::from).or(split.gen_info),
            tool_calls: self
                .tool_calls
                .into_iter()
                .map(ToolCallRecord::to_tool_call)
                .collect(),
        };

        (version, extras)
    }
}

/// Message content: a plain string or a list of typed parts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentRecord {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentPart {
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
}

impl ContentRecord {
    /// Text parts joined by newlines; `None` when there is no text at all
    pub fn to_text(self) -> Option<String> {
        match self {
            ContentRecord::Text(text) => Some(text),
            ContentRecord::Parts(parts) => {
                let texts: Vec<String> = parts
                    .into_iter()
                    .filter(|p| p.kind.as_deref().is_none_or(|k| k == "text"))
                    .filter_map(|p| p.text)
                    .collect();
                if texts.is_empty() {
                    None
                } else {
                    Some(texts.join("\n"))
                }
            }
        }
    }
}

/// A reasoning step: a bare string, or a content block from a multi-step export
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StepRecord {
    Text(String),
    Block(StepBlockRecord),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StepBlockRecord {
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub content: Option<ContentRecord>,
    pub style: Option<Value>,
    #[serde(rename = "genInfo", deserialize_with = "lenient::optional")]
    pub gen_info: Option<GenInfoRecord>,
}

impl StepBlockRecord {
    /// Only content blocks carry text; untyped blocks come from hand-written exports
    fn is_content(&self) -> bool {
        self.kind.as_deref().is_none_or(|k| k == "contentBlock")
    }

    fn is_thinking(&self) -> bool {
        self.style
            .as_ref()
            .is_some_and(|style| style.to_string().to_lowercase().contains("thinking"))
    }

    fn title(&self) -> Option<String> {
        self.style
            .as_ref()
            .and_then(|style| style.get("title"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[derive(Debug, Default)]
struct SplitSteps {
    thinking: Vec<Step>,
    response: Option<String>,
    gen_info: Option<GenInfo>,
}

// Separate thinking fragments from response blocks. The last block carrying
// statistics wins.
fn split_steps(records: Vec<StepRecord>) -> SplitSteps {
    let mut split = SplitSteps::default();
    let mut response: Vec<String> = Vec::new();

    for record in records {
        match record {
            StepRecord::Text(text) => split.thinking.push(Step::new(text)),
            StepRecord::Block(block) => {
                let content_block = block.is_content();
                let thinking = block.is_thinking();
                let title = block.title();
                if let Some(stats) = block.gen_info {
                    split.gen_info = Some(stats.into());
                }
                if !content_block {
                    continue;
                }
                let Some(text) = block.content.and_then(|c| c.to_text()) else {
                    continue;
                };
                if thinking {
                    split.thinking.push(Step { text, title });
                } else {
                    response.push(text);
                }
            }
        }
    }

    if !response.is_empty() {
        split.response = Some(response.join("\n\n"));
    }
    split
}

/// Statistics either flat or nested under `stats`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenInfoRecord {
    Nested { stats: GenStatsRecord },
    Flat(GenStatsRecord),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenStatsRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub stop_reason: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub tokens_per_second: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub time_to_first_token_sec: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_time_sec: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub prompt_tokens_count: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub predicted_tokens_count: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_tokens_count: Option<f64>,
}

impl From<GenInfoRecord> for GenInfo {
    fn from(record: GenInfoRecord) -> Self {
        let stats = match record {
            GenInfoRecord::Nested { stats } => stats,
            GenInfoRecord::Flat(stats) => stats,
        };
        GenInfo {
            stop_reason: stats.stop_reason,
            tokens_per_second: stats.tokens_per_second,
            time_to_first_token_sec: stats.time_to_first_token_sec,
            total_time_sec: stats.total_time_sec,
            prompt_tokens_count: stats.prompt_tokens_count,
            predicted_tokens_count: stats.predicted_tokens_count,
            total_tokens_count: stats.total_tokens_count,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ToolCallRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    pub arguments: Option<Value>,
    #[serde(alias = "output")]
    pub result: Option<Value>,
    #[serde(deserialize_with = "lenient::optional")]
    pub function: Option<FunctionRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FunctionRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    pub arguments: Option<Value>,
}

impl ToolCallRecord {
    pub fn to_tool_call(self) -> ToolCall {
        let (function_name, function_arguments) = match self.function {
            Some(f) => (f.name, f.arguments),
            None => (None, None),
        };
        ToolCall {
            name: self.name.or(function_name),
            arguments: self.arguments.or(function_arguments),
            result: self.result,
        }
    }
}
