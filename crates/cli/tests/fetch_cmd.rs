//! CLI tests for `slashc fetch`.

mod common;

use common::{FIXTURES_JSON, slashc, stdout_json, write_temp};

#[test]
fn fetch_from_fixtures_prints_items() {
    let (_dir, fixtures) = write_temp("lists.json", FIXTURES_JSON);
    let output = slashc()
        .args(["fetch", "/users", "--output", "json", "--fixtures"])
        .arg(&fixtures)
        .output()
        .expect("run fetch command");
    assert!(output.status.success());
    let json = stdout_json(&output);
    let items = json.as_array().expect("items array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["item"], "alice");
    assert_eq!(items[0]["hint"], "Alice");
}

#[test]
fn unknown_source_fails() {
    let output = slashc()
        .args(["fetch", "/teams", "--output", "json", "--offline"])
        .output()
        .expect("run fetch command");
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("failed to fetch list '/teams'")),
        "unexpected message: {}",
        json["message"]
    );
}

#[test]
fn relative_source_without_base_url_fails() {
    let output = slashc()
        .args(["fetch", "/teams", "--output", "json", "--retries", "0"])
        .output()
        .expect("run fetch command");
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("no base URL")),
        "unexpected message: {}",
        json["message"]
    );
}
