//! Per-message HTML rendering.
//!
//! Every message becomes one `<div class="message {role}">` block. User
//! messages carry only their text; assistant messages may add a thinking
//! section, a statistics panel and a tool call list. Optional parts that are
//! absent from the message produce no markup at all.

use serde_json::Value;
use tracing::debug;

use crate::domain::{GenInfo, Message, MessageRole, Step, ToolCall};
use crate::utils::{
    format_count, format_epoch, format_rate, format_seconds, html_escape, text_to_html,
};

/// Render one message block. `index` is the message's position in the conversation.
pub fn render_message(index: usize, message: &Message) -> String {
    let timestamp_html = message
        .timestamp
        .and_then(format_epoch)
        .map(|ts| format!(r#"<span class="message-timestamp">{}</span>"#, ts))
        .unwrap_or_default();

    let text = message.text();
    let content_html = if text.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"
                <div class="message-content">{}</div>"#,
            text_to_html(&text)
        )
    };

    let body = match message.role {
        MessageRole::User => content_html,
        MessageRole::Assistant => {
            let mut body = render_thinking(&message.steps);
            body.push_str(&content_html);
            if let Some(info) = &message.gen_info {
                body.push_str(&render_stats(info));
            }
            body.push_str(&render_tool_calls(&message.tool_calls));
            body
        }
    };

    let rendered = format!(
        r#"
        <div class="message {role}" id="message-{index}">
            <div class="message-bubble">
                <div class="message-header">
                    <span class="message-role">{label}</span>
                    {timestamp}
                </div>{body}
            </div>
        </div>"#,
        role = message.role.as_str(),
        index = index,
        label = message.role.label(),
        timestamp = timestamp_html,
        body = body,
    );

    debug!(
        component = "renderer",
        message_index = index,
        role = message.role.as_str(),
        steps = message.steps.len(),
        tool_calls = message.tool_calls.len(),
        bytes = rendered.len(),
        "Message rendered"
    );

    rendered
}

fn render_thinking(steps: &[Step]) -> String {
    if steps.is_empty() {
        return String::new();
    }

    let blocks: String = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let caption = step
                .title
                .as_deref()
                .map(|title| {
                    format!(
                        r#"<div class="thinking-duration">{}</div>"#,
                        html_escape(title)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"
                    <div class="thinking-step" data-step="{}">{}{}</div>"#,
                i + 1,
                caption,
                text_to_html(&step.text)
            )
        })
        .collect();

    format!(
        r#"
                <div class="thinking">
                    <div class="thinking-title">Thinking Process</div>{}
                </div>"#,
        blocks
    )
}

fn stat_entries(info: &GenInfo) -> Vec<(&'static str, String)> {
    let mut entries = Vec::new();
    if let Some(reason) = &info.stop_reason {
        entries.push(("Stop Reason", reason.clone()));
    }
    if let Some(rate) = info.tokens_per_second {
        entries.push(("Tokens Per Second", format_rate(rate)));
    }
    if let Some(secs) = info.time_to_first_token_sec {
        entries.push(("Time to First Token", format_seconds(secs)));
    }
    if let Some(secs) = info.total_time_sec {
        entries.push(("Total Time", format_seconds(secs)));
    }
    if let Some(count) = info.prompt_tokens_count {
        entries.push(("Prompt Tokens", format_count(count)));
    }
    if let Some(count) = info.predicted_tokens_count {
        entries.push(("Predicted Tokens", format_count(count)));
    }
    if let Some(count) = info.total_tokens_count {
        entries.push(("Total Tokens", format_count(count)));
    }
    entries
}

fn render_stats(info: &GenInfo) -> String {
    let entries = stat_entries(info);
    if entries.is_empty() {
        return String::new();
    }

    let items: String = entries
        .iter()
        .map(|(label, value)| {
            format!(
                r#"
                    <div class="stat-item"><span class="stat-label">{}:</span> {}</div>"#,
                label,
                html_escape(value)
            )
        })
        .collect();

    format!(
        r#"
                <div class="stats-section">
                    <div class="stats-title">Model Generation Statistics</div>{}
                </div>"#,
        items
    )
}

fn render_tool_calls(calls: &[ToolCall]) -> String {
    if calls.is_empty() {
        return String::new();
    }

    let items: String = calls.iter().map(render_tool_call).collect();

    format!(
        r#"
                <div class="tool-calls">
                    <div class="tool-calls-title">Tool Calls</div>{}
                </div>"#,
        items
    )
}

fn render_tool_call(call: &ToolCall) -> String {
    let name = call.name.as_deref().unwrap_or("Unknown");

    let arguments = call
        .arguments
        .as_ref()
        .and_then(json_text)
        .map(|args| format!(r#"<pre class="tool-arguments">{}</pre>"#, html_escape(&args)))
        .unwrap_or_default();

    let result = call
        .result
        .as_ref()
        .and_then(json_text)
        .map(|out| format!(r#"<pre class="tool-result">{}</pre>"#, html_escape(&out)))
        .unwrap_or_default();

    format!(
        r#"
                    <div class="tool-call"><span class="tool-name">{}</span>{}{}</div>"#,
        html_escape(name),
        arguments,
        result
    )
}

// Strings are shown verbatim since arguments often arrive pre-encoded
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => serde_json::to_string_pretty(other).ok(),
    }
}
