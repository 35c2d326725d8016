use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const SCENARIO: &str = r#"{"name":"Test","createdAt":1700000000,"tokenCount":10,"messages":[{"role":"user","content":"Hi"}]}"#;

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chat-html"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CHAT_HTML_TITLE")
        .env_remove("CHAT_HTML_FOOTER")
        .output()
        .expect("failed to launch chat-html")
}

#[test]
fn test_cli_success() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("chat.json");
    let output = dir.path().join("chat.html");
    fs::write(&input, SCENARIO).unwrap();

    let result = run(&[&input, &output]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("HTML chat interface saved to"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("Conversation: Test"));
    assert!(html.contains(r#"<div class="message user""#));
}

#[test]
fn test_cli_default_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("session.json");
    fs::write(&input, SCENARIO).unwrap();

    let result = run(&[&input]);
    assert!(result.status.success());
    assert!(dir.path().join("session_chat.html").exists());
}

#[test]
fn test_cli_missing_arguments() {
    let result = run(&[]);
    assert_eq!(result.status.code(), Some(2));
    assert!(!result.stderr.is_empty());
}

#[test]
fn test_cli_missing_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.json");
    let output = dir.path().join("out.html");

    let result = run(&[&input, &output]);
    assert_eq!(result.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&result.stderr).contains("parse error"));
    assert!(!output.exists());
}

#[test]
fn test_cli_invalid_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.json");
    let output = dir.path().join("out.html");
    fs::write(&input, r#"{"name": "x", "messages": ["#).unwrap();

    let result = run(&[&input, &output]);
    assert_eq!(result.status.code(), Some(3));
    assert!(!output.exists());
}

#[test]
fn test_cli_unwritable_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("chat.json");
    fs::write(&input, SCENARIO).unwrap();
    let output = dir.path().join("no_such_dir").join("out.html");

    let result = run(&[&input, &output]);
    assert_eq!(result.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&result.stderr).contains("write error"));
    assert!(!output.exists());
}
