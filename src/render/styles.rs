/// Stylesheet embedded in every document so the page has no external assets
pub const STYLES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: "Segoe UI", Tahoma, Geneva, Verdana, sans-serif;
    background: #ffffff;
    color: #111111;
    line-height: 1.6;
}
.container { width: 100%; min-height: 100vh; display: flex; flex-direction: column; }
.header { background: #111111; color: #ffffff; padding: 20px; text-align: center; }
.header h1 { font-size: 1.8rem; margin-bottom: 10px; }
.conversation-info {
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 10px;
    font-size: 0.9rem;
}
.system-prompt {
    background: #f0f0f0;
    color: #111111;
    border: 1px solid #111111;
    margin-top: 15px;
    padding: 15px;
    text-align: left;
    font-size: 0.9rem;
}
.system-prompt-title { font-weight: bold; margin-bottom: 8px; }
.chat-container { flex: 1; padding: 20px; }
.message { display: flex; flex-direction: column; align-items: flex-start; margin-bottom: 20px; }
.message.user { align-items: flex-end; }
.message-bubble { max-width: 80%; padding: 15px; border: 1px solid #111111; word-wrap: break-word; }
.user .message-bubble { background: #111111; color: #ffffff; border-bottom-right-radius: 5px; }
.assistant .message-bubble { background: #ffffff; color: #111111; border-bottom-left-radius: 5px; }
.message-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 12px;
    margin-bottom: 8px;
    font-size: 0.85rem;
}
.message-role { font-weight: bold; text-transform: uppercase; }
.message-timestamp { font-size: 0.7rem; }
.thinking { margin: 10px 0; }
.thinking-step {
    background: #f0f0f0;
    border-left: 4px solid #111111;
    padding: 12px;
    margin: 6px 0;
    font-size: 0.9rem;
    font-style: italic;
}
.thinking-title { font-weight: bold; font-style: normal; margin-bottom: 4px; }
.thinking-duration {
    display: inline-block;
    background: #e0e0e0;
    border-radius: 12px;
    padding: 2px 10px;
    margin-bottom: 6px;
    font-size: 0.8rem;
    font-style: normal;
}
.message-content { font-size: 0.95rem; }
.stats-section, .tool-calls {
    background: #f0f0f0;
    color: #111111;
    border: 1px solid #111111;
    padding: 10px;
    margin: 10px 0;
    font-size: 0.8rem;
}
.stats-title, .tool-calls-title { font-weight: bold; margin-bottom: 5px; }
.stat-item { margin: 3px 0; }
.stat-label { font-weight: bold; }
.tool-call { margin: 6px 0; }
.tool-name { font-weight: bold; }
.tool-call pre {
    background: #ffffff;
    border: 1px solid #cccccc;
    padding: 6px;
    margin-top: 4px;
    white-space: pre-wrap;
    word-break: break-word;
    font-family: Consolas, Menlo, monospace;
}
.footer { text-align: center; padding: 15px; background: #f0f0f0; border-top: 1px solid #111111; font-size: 0.8rem; }
"#;
