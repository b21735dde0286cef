//! Shared helpers for `slashc` CLI tests.

#![allow(unreachable_pub)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use assert_cmd::cargo;

/// A tree with a text argument, a static list, a dynamic list and a
/// role-restricted command.
#[allow(dead_code)]
pub const TREE_JSON: &str = r#"{
    "formatVersion": "1.0.0",
    "commands": [
        {
            "trigger": "echo",
            "hint": "[message]",
            "helpText": "Echo a message back",
            "arguments": [ { "type": "text", "helpText": "Message", "hint": "[text]" } ]
        },
        {
            "trigger": "jira",
            "helpText": "Jira integration",
            "subCommands": [
                {
                    "trigger": "create",
                    "arguments": [
                        {
                            "type": "staticList",
                            "helpText": "Project",
                            "items": [
                                { "item": "core", "hint": "Core platform" },
                                { "item": "web", "hint": "Web client" }
                            ]
                        }
                    ]
                },
                {
                    "trigger": "assign",
                    "arguments": [
                        { "type": "dynamicList", "helpText": "Assignee", "fetchUrl": "/users" }
                    ]
                }
            ]
        },
        { "trigger": "shutdown", "roleId": "system_admin", "helpText": "Stop the server" }
    ]
}"#;

/// Fixture lists served for `--fixtures`.
#[allow(dead_code)]
pub const FIXTURES_JSON: &str = r#"{
    "/users": [
        { "item": "alice", "hint": "Alice" },
        { "item": "alan", "hint": "Alan" },
        { "item": "bob", "hint": "Bob" }
    ]
}"#;

/// The `slashc` binary under test.
#[allow(dead_code)]
pub fn slashc() -> Command {
    Command::new(cargo::cargo_bin!("slashc"))
}

/// Write `content` to `name` in a fresh temp dir.
#[allow(dead_code)]
pub fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write temp file");
    (dir, path)
}

/// Parse stdout as JSON, with the raw output in the panic message.
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid json ({e}): {stdout}"))
}

/// The `completedText` of every suggestion in a `suggest --output json` result.
#[allow(dead_code)]
pub fn completed(json: &serde_json::Value) -> Vec<String> {
    json["suggestions"]
        .as_array()
        .expect("suggestions array")
        .iter()
        .map(|s| s["completedText"].as_str().expect("completedText").to_string())
        .collect()
}
