//! The recursive command matcher: the engine's entry point.

use serde::Serialize;
use slash_complete_command_tree::{Argument, CommandNode};
use slash_complete_diagnostics::Diagnostic;

use crate::args::{ArgOutcome, parse_argument};
use crate::fetch::ListFetcher;
use crate::role::role_allows;
use crate::scan::{Cursor, next_space};
use crate::suggestion::Suggestion;

/// Result of resolving one input against a command tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestResult {
    /// Candidate completions, in tree declaration order.
    pub suggestions: Vec<Suggestion>,
    /// Recoverable problems met along the way (failed fetches, skipped
    /// named arguments). Never affects which suggestions are returned.
    pub diagnostics: Vec<Diagnostic>,
}

impl SuggestResult {
    /// The `completed_text` of every suggestion, in order.
    pub fn completed_texts(&self) -> Vec<&str> {
        self.suggestions
            .iter()
            .map(|s| s.completed_text.as_str())
            .collect()
    }
}

/// Suggest completions for the whole of `input`.
///
/// `role` is the caller's role filter: empty or [`ADMIN_ROLE`] sees every
/// node, anything else only nodes tagged with exactly that role.
/// `fetcher` loads the items of dynamic list arguments.
///
/// [`ADMIN_ROLE`]: crate::role::ADMIN_ROLE
pub fn suggest(
    commands: &[CommandNode],
    input: &str,
    role: &str,
    fetcher: &dyn ListFetcher,
) -> SuggestResult {
    suggest_cursor(commands, Cursor::new(input), role, fetcher)
}

/// Suggest completions for `remaining`, treating `already_parsed` as text
/// that was consumed before reaching `commands`.
///
/// Every `completed_text` starts with `already_parsed`.
pub fn suggest_from(
    commands: &[CommandNode],
    already_parsed: &str,
    remaining: &str,
    role: &str,
    fetcher: &dyn ListFetcher,
) -> SuggestResult {
    let input = format!("{already_parsed}{remaining}");
    let cursor = Cursor::new(&input).advance(already_parsed.len());
    suggest_cursor(commands, cursor, role, fetcher)
}

fn suggest_cursor(
    commands: &[CommandNode],
    cursor: Cursor<'_>,
    role: &str,
    fetcher: &dyn ListFetcher,
) -> SuggestResult {
    let mut m = Matcher {
        role,
        fetcher,
        suggestions: Vec::new(),
        diags: Vec::new(),
    };
    m.match_nodes(commands, cursor);
    tracing::debug!(
        input_len = cursor.input().len(),
        role,
        suggestions = m.suggestions.len(),
        diagnostics = m.diags.len(),
        "suggest"
    );
    SuggestResult {
        suggestions: m.suggestions,
        diagnostics: m.diags,
    }
}

struct Matcher<'r> {
    role: &'r str,
    fetcher: &'r dyn ListFetcher,
    suggestions: Vec<Suggestion>,
    diags: Vec<Diagnostic>,
}

impl Matcher<'_> {
    fn match_nodes(&mut self, nodes: &[CommandNode], cursor: Cursor<'_>) {
        let rest = cursor.remaining();
        let Some(i) = next_space(rest) else {
            for node in nodes {
                if node.trigger.starts_with(rest) && role_allows(self.role, &node.role_id) {
                    self.suggestions.push(Suggestion::new(
                        cursor.complete_with(&node.trigger),
                        &node.hint,
                        &node.help_text,
                    ));
                }
            }
            return;
        };

        let token = &rest[..i];
        let after = cursor.advance(i + 1);
        for node in nodes {
            if node.trigger != token || !role_allows(self.role, &node.role_id) {
                continue;
            }
            if node.arguments.is_empty() {
                self.match_nodes(&node.sub_commands, after);
            } else {
                self.match_arguments(&node.arguments, after);
            }
        }
    }

    fn match_arguments(&mut self, arguments: &[Argument], mut cursor: Cursor<'_>) {
        for arg in arguments {
            match parse_argument(arg, cursor, self.fetcher, &mut self.diags) {
                ArgOutcome::Complete(next) => cursor = next,
                ArgOutcome::Incomplete(suggestions) => {
                    self.suggestions.extend(suggestions);
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MapFetcher;
    use slash_complete_command_tree::ListItem;

    fn tree() -> Vec<CommandNode> {
        vec![
            CommandNode::new("echo")
                .with_hint("[message]")
                .with_help_text("Echo back")
                .with_argument(Argument::text("Message", "[text]")),
            CommandNode::new("away").with_help_text("Set away"),
            CommandNode::new("jira").with_sub_command(
                CommandNode::new("create").with_argument(Argument::static_list(
                    "Project",
                    vec![ListItem::new("core", ""), ListItem::new("web", "")],
                )),
            ),
        ]
    }

    fn texts(input: &str) -> Vec<String> {
        suggest(&tree(), input, "", &MapFetcher::new())
            .suggestions
            .into_iter()
            .map(|s| s.completed_text)
            .collect()
    }

    #[test]
    fn empty_input_offers_all_top_level() {
        assert_eq!(texts(""), ["echo", "away", "jira"]);
    }

    #[test]
    fn trigger_suggestion_copies_node_fields() {
        let r = suggest(&tree(), "ec", "", &MapFetcher::new());
        assert_eq!(
            r.suggestions,
            vec![Suggestion::new("echo", "[message]", "Echo back")]
        );
    }

    #[test]
    fn unknown_trigger_yields_nothing() {
        assert!(texts("nope ").is_empty());
        assert!(texts("x").is_empty());
    }

    #[test]
    fn descends_into_sub_commands() {
        assert_eq!(texts("jira "), ["jira create"]);
        assert_eq!(texts("jira create "), ["jira create core", "jira create web"]);
        assert_eq!(texts("jira create w"), ["jira create web"]);
    }

    #[test]
    fn all_arguments_complete_emits_nothing() {
        assert!(texts("jira create core ").is_empty());
        assert!(texts("echo hello ").is_empty());
    }

    #[test]
    fn suggest_from_prefixes_already_parsed() {
        let nodes = tree();
        let sub = &nodes[2].sub_commands;
        let r = suggest_from(sub, "/jira ", "cr", "", &MapFetcher::new());
        assert_eq!(r.completed_texts(), ["/jira create"]);
    }

    #[test]
    fn trigger_match_is_case_sensitive() {
        assert!(texts("Echo").is_empty());
        assert!(texts("ECHO ").is_empty());
    }
}
