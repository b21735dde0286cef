//! Slash-command autocomplete engine.
//!
//! Resolves partially typed command text into completion suggestions by
//! walking a [`CommandNode`] tree. The main entry point is [`suggest`],
//! which re-evaluates the whole input on every call and never fails:
//! problems such as an unreachable dynamic list come back as diagnostics
//! next to the suggestions. [`check_tree`] reports structural problems in a
//! tree before it is used.

macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// Argument parsers: free text, static and dynamic lists.
pub mod args;
/// Tree checks reported as diagnostics.
pub mod check;
/// The dynamic list boundary.
pub mod fetch;
/// Recursive command matching.
pub mod matcher;
/// Role visibility.
pub mod role;
/// Token scanning helpers and the input cursor.
pub mod scan;
mod suggestion;

// ── Convenience re-exports ──────────────────────────────────────────────

pub use args::{ArgOutcome, match_list, parse_argument, parse_text};
pub use check::check_tree;
pub use fetch::{FetchError, ListFetcher, MapFetcher};
pub use matcher::{SuggestResult, suggest, suggest_from};
pub use role::{ADMIN_ROLE, role_allows};
pub use scan::Cursor;
pub use suggestion::Suggestion;

// Tree model and diagnostics, re-exported so hosts need a single dependency.
pub use slash_complete_command_tree::{ArgKind, Argument, CommandNode, CommandTree, ListItem};
pub use slash_complete_diagnostics::{Diagnostic, Severity, Span, codes};
