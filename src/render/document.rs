use tracing::info;

use crate::config::RenderConfig;
use crate::domain::Conversation;
use crate::utils::{format_timestamp, format_token_count, html_escape, text_to_html};

use super::message::render_message;
use super::styles::STYLES;

/// Turns a conversation into a complete, self-contained HTML document
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, conversation: &Conversation) -> String {
        let messages: String = conversation
            .messages
            .iter()
            .enumerate()
            .map(|(index, message)| render_message(index, message))
            .collect();

        let document = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
    <div class="container">
{header}
        <div class="chat-container" id="chatContainer">{messages}
        </div>
{footer}
    </div>
</body>
</html>
"#,
            title = html_escape(&self.config.title),
            styles = STYLES,
            header = self.render_header(conversation),
            messages = messages,
            footer = self.render_footer(),
        );

        info!(
            messages = conversation.messages.len(),
            bytes = document.len(),
            "Document assembled"
        );

        document
    }

    fn render_header(&self, conversation: &Conversation) -> String {
        let system_prompt = conversation
            .system_prompt()
            .map(|prompt| {
                format!(
                    r#"
            <div class="system-prompt">
                <div class="system-prompt-title">System Prompt</div>
                <div>{}</div>
            </div>"#,
                    text_to_html(prompt)
                )
            })
            .unwrap_or_default();

        format!(
            r#"        <div class="header">
            <h1>{title}</h1>
            <div class="conversation-info">
                <span>Conversation: {name}</span>
                <span>Created: {created}</span>
                <span>Total Tokens: {tokens}</span>
            </div>{system_prompt}
        </div>"#,
            title = html_escape(&self.config.title),
            name = html_escape(&conversation.name),
            created = format_timestamp(conversation.created_at),
            tokens = format_token_count(conversation.token_count),
            system_prompt = system_prompt,
        )
    }

    fn render_footer(&self) -> String {
        if self.config.footer.trim().is_empty() {
            return String::new();
        }
        format!(
            r#"        <div class="footer">
            <p>{}</p>
        </div>"#,
            html_escape(&self.config.footer)
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
