//! CLI tests for `slashc explain`.

mod common;

use common::{slashc, stdout_json};

#[test]
fn explain_known_code_json_returns_explanation() {
    let output = slashc()
        .args(["explain", "SC1001", "--output", "json"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["id"], "SC1001");
    assert!(json["explanation"].is_string());
}

#[test]
fn explain_unknown_code_json_returns_null_explanation() {
    let output = slashc()
        .args(["explain", "SC9999", "--output", "json"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["id"], "SC9999");
    assert!(json["explanation"].is_null());
}

#[test]
fn explain_pretty_shows_human_readable_text() {
    let output = slashc()
        .args(["explain", "SC2004", "--output", "pretty"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("SC2004") && stdout.contains("sub-commands"),
        "unexpected output: {stdout}"
    );
}
