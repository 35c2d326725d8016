use chat_html::{
    ExportService, Renderer,
    config::RenderConfig,
    domain::MessageRole,
    input::{LoadError, load_conversation, parse_conversation},
    services::ExportError,
};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn lm_studio_export() -> serde_json::Value {
    json!({
        "name": "Rust questions",
        "createdAt": 1700000000000u64,
        "tokenCount": 1234,
        "systemPrompt": "You are a helpful assistant.",
        "messages": [
            {
                "versions": [{
                    "type": "singleStep",
                    "role": "user",
                    "content": [{"type": "text", "text": "How do I read a file?"}],
                    "preprocessed": {"timestamp": 1700000001000u64}
                }]
            },
            {
                "versions": [{
                    "type": "multiStep",
                    "role": "assistant",
                    "steps": [
                        {
                            "type": "contentBlock",
                            "style": {"type": "thinking", "title": "Thought for 1.2 seconds"},
                            "content": [{"type": "text", "text": "The user wants std::fs."}]
                        },
                        {
                            "type": "contentBlock",
                            "content": [{"type": "text", "text": "Use std::fs::read_to_string."}],
                            "genInfo": {
                                "stats": {
                                    "stopReason": "eosFound",
                                    "tokensPerSecond": 55.5,
                                    "timeToFirstTokenSec": 0.25,
                                    "totalTimeSec": 2.0,
                                    "promptTokensCount": 100,
                                    "predictedTokensCount": 40,
                                    "totalTokensCount": 140
                                }
                            }
                        }
                    ]
                }]
            }
        ]
    })
}

#[test]
fn test_scenario_simple_user_message() {
    let conversation = parse_conversation(
        r#"{"name":"Test","createdAt":1700000000,"tokenCount":10,"messages":[{"role":"user","content":"Hi"}]}"#,
    )
    .unwrap();

    let html = Renderer::default().render(&conversation);
    assert!(html.contains("Conversation: Test"));
    assert!(html.contains("2023-11-14 22:13:20"));
    assert!(html.contains("Total Tokens: 10"));

    let block_start = html.find(r#"<div class="message user""#).unwrap();
    let hi = html.find(">Hi<").unwrap();
    assert!(hi > block_start);
}

#[test]
fn test_scenario_thinking_steps() {
    let conversation = parse_conversation(
        &json!({
            "name": "Steps",
            "createdAt": 1700000000,
            "tokenCount": 3,
            "messages": [
                {"role": "assistant", "content": "done", "steps": ["step1", "step2"]}
            ]
        })
        .to_string(),
    )
    .unwrap();

    let html = Renderer::default().render(&conversation);
    let section = html.find(r#"<div class="thinking">"#).unwrap();
    let step1 = html.find("step1").unwrap();
    let step2 = html.find("step2").unwrap();
    let content = html.find(r#"<div class="message-content">done</div>"#).unwrap();
    assert!(section < step1 && step1 < step2 && step2 < content);
}

#[test]
fn test_lm_studio_export() {
    let conversation = parse_conversation(&lm_studio_export().to_string()).unwrap();
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[0].role, MessageRole::User);
    assert_eq!(conversation.messages[1].role, MessageRole::Assistant);

    let html = Renderer::default().render(&conversation);
    assert!(html.contains("Created: 2023-11-14 22:13:20"));
    assert!(html.contains("Total Tokens: 1234"));
    assert!(html.contains("You are a helpful assistant."));
    assert!(html.contains("How do I read a file?"));
    assert!(html.contains("2023-11-14 22:13:21"));
    assert!(html.contains("Thought for 1.2 seconds"));
    assert!(html.contains("The user wants std::fs."));
    assert!(html.contains("Use std::fs::read_to_string."));
    assert!(html.contains("Stop Reason:</span> eosFound"));
    assert!(html.contains("Tokens Per Second:</span> 55.50"));
    assert!(html.contains("Time to First Token:</span> 0.25s"));
    assert!(html.contains("Total Tokens:</span> 140"));
    assert!(!html.contains("tool-calls"));
}

#[test]
fn test_injection_is_escaped_everywhere() {
    let payload = "<script>alert('x')</script> & co";
    let conversation = parse_conversation(
        &json!({
            "name": payload,
            "createdAt": 1,
            "tokenCount": 0,
            "systemPrompt": payload,
            "messages": [
                {"role": "user", "content": payload},
                {
                    "role": "assistant",
                    "content": payload,
                    "steps": [payload],
                    "genInfo": {"stopReason": payload},
                    "tool_calls": [{"name": payload, "arguments": payload, "result": payload}]
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    let html = Renderer::default().render(&conversation);
    assert!(!html.contains("<script>"));
    assert!(!html.contains("& co"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co"));
}

#[test]
fn test_omission_of_optional_panels() {
    let conversation = parse_conversation(
        &json!({
            "name": "Bare",
            "createdAt": 1700000000,
            "tokenCount": 1,
            "messages": [
                {"role": "assistant", "content": "no extras"},
                {"role": "assistant", "content": "with tool", "tool_calls": [{"name": "calc"}]}
            ]
        })
        .to_string(),
    )
    .unwrap();

    let html = Renderer::default().render(&conversation);
    assert!(!html.contains(r#"<div class="stats-section">"#));
    assert_eq!(html.matches(r#"<div class="tool-calls">"#).count(), 1);

    let first = html.find(r#"id="message-0""#).unwrap();
    let second = html.find(r#"id="message-1""#).unwrap();
    let tools = html.find(r#"<div class="tool-calls">"#).unwrap();
    assert!(first < second && second < tools);
}

#[test]
fn test_export_is_deterministic() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("chat.json");
    fs::write(&input, lm_studio_export().to_string()).unwrap();

    let service = ExportService::new(RenderConfig::default());
    let first = dir.path().join("a.html");
    let second = dir.path().join("b.html");
    service.export(&input, &first).unwrap();
    service.export(&input, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_load_errors() {
    let dir = tempdir().unwrap();

    let missing = load_conversation(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, LoadError::Io { .. }));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "this is not json").unwrap();
    let invalid = load_conversation(&garbage).unwrap_err();
    assert!(matches!(invalid, LoadError::Json { .. }));

    let service = ExportService::new(RenderConfig::default());
    let output = dir.path().join("out.html");
    let err = service.export(&garbage, &output).unwrap_err();
    assert!(matches!(err, ExportError::Load(_)));
    assert!(!output.exists());
}
