use std::env;

pub const DEFAULT_TITLE: &str = "Conversation Chat Interface";
pub const DEFAULT_FOOTER: &str = "Generated by chat-html";
pub const DEFAULT_LOG_FILTER: &str = "chat_html=info";

#[derive(Debug, Clone)]
pub struct Settings {
    pub render: RenderConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub title: String,
    pub footer: String,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            title: DEFAULT_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let title = lookup("CHAT_HTML_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());
        if title.trim().is_empty() {
            return Err("CHAT_HTML_TITLE must not be empty".to_string());
        }

        Ok(Settings {
            render: RenderConfig {
                title,
                footer: lookup("CHAT_HTML_FOOTER").unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
            },
            log: LogConfig {
                filter: lookup("CHAT_HTML_LOG")
                    .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
        })
    }
}
