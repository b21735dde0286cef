//! Shared test helpers for `slash_complete_core` integration tests.

#![allow(unreachable_pub)]

use slash_complete_core::{
    Argument, CommandNode, FetchError, ListFetcher, ListItem, MapFetcher, SuggestResult, suggest,
};

/// Source registered in [`fixture_fetcher`].
#[allow(dead_code)]
pub const TEAMS_SOURCE: &str = "https://lists.example.test/teams";

/// A command tree covering every argument kind, nesting and role tags.
///
/// ```text
/// echo <text>
/// away
/// jira create <staticList core|web> <text>
/// jira connect
/// jira settings <dynamicList teams>        (role: team_admin)
/// poll <named text> <text>
/// assign <staticList a|ab> <text>
/// ```
#[allow(dead_code)]
pub fn fixture_tree() -> Vec<CommandNode> {
    vec![
        CommandNode::new("echo")
            .with_hint("[message]")
            .with_help_text("Echo a message back")
            .with_argument(Argument::text("Message to echo", "[text]")),
        CommandNode::new("away").with_help_text("Set status to away"),
        CommandNode::new("jira")
            .with_hint("[command]")
            .with_help_text("Jira integration")
            .with_sub_command(
                CommandNode::new("create")
                    .with_help_text("Create an issue")
                    .with_argument(Argument::static_list(
                        "Project",
                        vec![
                            ListItem::new("core", "Core platform"),
                            ListItem::new("web", "Web client"),
                        ],
                    ))
                    .with_argument(Argument::text("Issue summary", "[summary]")),
            )
            .with_sub_command(CommandNode::new("connect").with_help_text("Connect account"))
            .with_sub_command(
                CommandNode::new("settings")
                    .with_role("team_admin")
                    .with_help_text("Team settings")
                    .with_argument(Argument::dynamic_list("Team", TEAMS_SOURCE)),
            ),
        CommandNode::new("poll")
            .with_argument(Argument::text("Anonymous", "").named("anonymous"))
            .with_argument(Argument::text("Question", "[question]")),
        CommandNode::new("assign")
            .with_argument(Argument::static_list(
                "Assignee",
                vec![ListItem::new("a", "short"), ListItem::new("ab", "long")],
            ))
            .with_argument(Argument::text("Note", "[note]")),
    ]
}

/// A fetcher serving the teams list of [`fixture_tree`].
#[allow(dead_code)]
pub fn fixture_fetcher() -> MapFetcher {
    MapFetcher::new().with_list(
        TEAMS_SOURCE,
        vec![
            ListItem::new("platform", "Platform team"),
            ListItem::new("payments", "Payments team"),
            ListItem::new("search", "Search team"),
        ],
    )
}

/// A fetcher whose every call fails as unreachable.
#[allow(dead_code)]
pub fn failing_fetcher(source: &str) -> Result<Vec<ListItem>, FetchError> {
    Err(FetchError::Unreachable {
        locator: source.to_string(),
        reason: "connection refused".into(),
    })
}

/// Run [`suggest`] against the fixture tree.
#[allow(dead_code)]
pub fn run(input: &str, role: &str, fetcher: &dyn ListFetcher) -> SuggestResult {
    suggest(&fixture_tree(), input, role, fetcher)
}

/// Completed texts for `input` with no role filter and the fixture fetcher.
#[allow(dead_code)]
pub fn texts(input: &str) -> Vec<String> {
    run(input, "", &fixture_fetcher())
        .suggestions
        .into_iter()
        .map(|s| s.completed_text)
        .collect()
}
