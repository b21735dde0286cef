//! CLI tests for `slashc suggest`.

mod common;

use common::{FIXTURES_JSON, TREE_JSON, completed, slashc, stdout_json, write_temp};

fn suggest(input: &str, extra: &[&str]) -> serde_json::Value {
    let (_dir, tree) = write_temp("tree.json", TREE_JSON);
    let output = slashc()
        .args(["suggest", input, "--output", "json", "--offline", "--tree"])
        .arg(&tree)
        .args(extra)
        .output()
        .expect("run suggest command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout_json(&output)
}

#[test]
fn trigger_prefix_suggestions() {
    let json = suggest("ec", &[]);
    assert_eq!(completed(&json), ["echo"]);
    assert_eq!(json["suggestions"][0]["hint"], "[message]");
    assert_eq!(json["suggestions"][0]["description"], "Echo a message back");
    assert_eq!(json["diagnostics"], serde_json::json!([]));
}

#[test]
fn text_argument_echoes_input() {
    assert_eq!(completed(&suggest("echo ", &[])), ["echo "]);
    assert_eq!(completed(&suggest("echo hello", &[])), ["echo hello"]);
}

#[test]
fn static_list_and_sub_commands() {
    assert_eq!(completed(&suggest("jira ", &[])), ["jira create", "jira assign"]);
    assert_eq!(
        completed(&suggest("jira create ", &[])),
        ["jira create core", "jira create web"]
    );
}

#[test]
fn role_flag_filters_commands() {
    assert_eq!(completed(&suggest("s", &[])), ["shutdown"]);
    assert_eq!(
        completed(&suggest("s", &["--role", "system_admin"])),
        ["shutdown"]
    );
    assert!(completed(&suggest("s", &["--role", "team_admin"])).is_empty());
}

#[test]
fn offline_dynamic_list_reports_diagnostic() {
    let json = suggest("jira assign al", &[]);
    assert!(completed(&json).is_empty());
    let diags = json["diagnostics"].as_array().expect("diagnostics array");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0]["id"], "SC1001");
    assert_eq!(diags[0]["severity"], "warn");
    assert_eq!(diags[0]["context"]["source"], "/users");
}

#[test]
fn fixtures_serve_dynamic_lists() {
    let (_dir, tree) = write_temp("tree.json", TREE_JSON);
    let (_fdir, fixtures) = write_temp("lists.json", FIXTURES_JSON);
    let output = slashc()
        .args(["suggest", "jira assign al", "--output", "json", "--tree"])
        .arg(&tree)
        .arg("--fixtures")
        .arg(&fixtures)
        .output()
        .expect("run suggest command");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(completed(&json), ["jira assign alice", "jira assign alan"]);
    assert_eq!(json["suggestions"][1]["hint"], "Alan");
}

#[test]
fn pretty_output_lists_completions() {
    let (_dir, tree) = write_temp("tree.json", TREE_JSON);
    let output = slashc()
        .args(["suggest", "jira create ", "--output", "pretty", "--offline", "--tree"])
        .arg(&tree)
        .output()
        .expect("run suggest command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    assert!(lines[0].starts_with("jira create core"), "{stdout}");
    assert!(lines[0].contains("Core platform"), "{stdout}");
    assert!(lines[1].starts_with("jira create web"), "{stdout}");
}

#[test]
fn invalid_tree_fails_with_json_envelope() {
    let (_dir, tree) = write_temp(
        "tree.json",
        r#"[{"trigger": "deploy", "arguments": [{"type": "text"}], "subCommands": [{"trigger": "now"}]}]"#,
    );
    let output = slashc()
        .args(["suggest", "dep", "--output", "json", "--offline", "--tree"])
        .arg(&tree)
        .output()
        .expect("run suggest command");
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "command_failed");
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("both arguments and sub-commands")),
        "unexpected message: {}",
        json["message"]
    );
}

#[test]
fn missing_tree_file_fails() {
    let output = slashc()
        .args([
            "suggest",
            "x",
            "--output",
            "json",
            "--offline",
            "--tree",
            "nope-does-not-exist.json",
        ])
        .output()
        .expect("run suggest command");
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("failed to read tree file")),
        "unexpected message: {}",
        json["message"]
    );
}

#[test]
fn fixtures_and_offline_conflict() {
    let (_dir, tree) = write_temp("tree.json", TREE_JSON);
    let output = slashc()
        .args(["suggest", "x", "--offline", "--fixtures", "f.json", "--tree"])
        .arg(&tree)
        .output()
        .expect("run suggest command");
    assert!(!output.status.success());
}
