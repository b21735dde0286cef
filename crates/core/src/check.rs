//! Structural tree checks reported as diagnostics.

use slash_complete_command_tree::{CommandNode, IssueKind, IssueSeverity, validate};
use slash_complete_diagnostics::{Diagnostic, Severity, codes};

/// Run every structural check over `nodes` and report the findings as
/// diagnostics, each carrying the offending node's path in its context.
pub fn check_tree(nodes: &[CommandNode]) -> Vec<Diagnostic> {
    validate(nodes)
        .into_iter()
        .map(|issue| {
            let id = match &issue.kind {
                IssueKind::EmptyTrigger => codes::EMPTY_TRIGGER,
                IssueKind::TriggerWhitespace => codes::TRIGGER_WHITESPACE,
                IssueKind::TriggerNotLowercase => codes::TRIGGER_NOT_LOWERCASE,
                IssueKind::ArgumentsWithSubCommands => codes::ARGUMENTS_WITH_SUBCOMMANDS,
                IssueKind::EmptyStaticList { .. } => codes::EMPTY_STATIC_LIST,
                IssueKind::EmptyFetchUrl { .. } => codes::EMPTY_FETCH_URL,
                IssueKind::NamedArgument { .. } => codes::NAMED_ARGUMENT_UNSUPPORTED,
            };
            let severity = match issue.kind.severity() {
                IssueSeverity::Error => Severity::Error,
                IssueSeverity::Warn => Severity::Warn,
                IssueSeverity::Info => Severity::Info,
            };
            let path = if issue.path.is_empty() {
                "<root>".to_string()
            } else {
                issue.path
            };
            Diagnostic::new(id, severity, issue.kind.to_string(), None)
                .with_context(ctx!("path" => path))
        })
        .collect()
}
