//! Per-argument parsing.
//!
//! Each positional argument either recognises a fully typed value at the
//! cursor and advances past it, or stops the walk and offers suggestions.

use slash_complete_command_tree::{ArgKind, Argument, ListItem};
use slash_complete_diagnostics::{Diagnostic, codes};

use crate::fetch::{FetchError, ListFetcher};
use crate::scan::{Cursor, Quoted, SEPARATOR, next_space, quoted_span, strip_separator};
use crate::suggestion::Suggestion;

/// Result of trying one argument against the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgOutcome<'a> {
    /// The value is fully typed; continue from the advanced cursor.
    Complete(Cursor<'a>),
    /// The value is still being typed; stop and offer these suggestions.
    Incomplete(Vec<Suggestion>),
}

/// Parse one argument at `cursor`.
///
/// Named arguments are not parsed: they pass through with the cursor
/// unchanged and an info diagnostic. A dynamic list whose fetch fails also
/// passes through unchanged, with the failure logged and recorded in `diags`.
pub fn parse_argument<'a>(
    arg: &Argument,
    cursor: Cursor<'a>,
    fetcher: &dyn ListFetcher,
    diags: &mut Vec<Diagnostic>,
) -> ArgOutcome<'a> {
    if !arg.is_positional() {
        diags.push(
            Diagnostic::info(
                codes::NAMED_ARGUMENT_UNSUPPORTED,
                format!("named argument `{}` is not supported; skipped", arg.name),
                Some(cursor.remaining_span()),
            )
            .with_context(ctx!("name" => arg.name.as_str())),
        );
        return ArgOutcome::Complete(cursor);
    }

    match &arg.kind {
        ArgKind::Text { hint } => parse_text(hint, &arg.help_text, cursor),
        ArgKind::StaticList { items } => match_list(items, &arg.help_text, cursor),
        ArgKind::DynamicList { fetch_url } => match fetcher.fetch(fetch_url) {
            Ok(items) => match_list(&items, &arg.help_text, cursor),
            Err(err) => {
                tracing::warn!(source = %fetch_url, error = %err, "dynamic list fetch failed");
                diags.push(fetch_diagnostic(&err, cursor));
                ArgOutcome::Complete(cursor)
            }
        },
    }
}

fn fetch_diagnostic(err: &FetchError, cursor: Cursor<'_>) -> Diagnostic {
    let id = match err {
        FetchError::Malformed { .. } => codes::FETCH_MALFORMED,
        _ => codes::FETCH_FAILED,
    };
    Diagnostic::warn(id, err.to_string(), Some(cursor.remaining_span()))
        .with_context(ctx!("source" => err.locator()))
}

/// Parse a free-text argument: a single word, or a `"quoted multi word"` value.
///
/// While the value is unfinished the only suggestion echoes the input back
/// with the argument's hint and help text.
pub fn parse_text<'a>(hint: &str, help_text: &str, cursor: Cursor<'a>) -> ArgOutcome<'a> {
    let (sep, value) = strip_separator(cursor.remaining());
    let token_len = if value.is_empty() {
        None
    } else {
        match quoted_span(value) {
            Quoted::Closed { len } => Some(len),
            Quoted::Unterminated => None,
            Quoted::NotQuoted => next_space(value).map(|j| j + 1),
        }
    };
    match token_len {
        Some(len) => ArgOutcome::Complete(cursor.advance(sep + len)),
        None => ArgOutcome::Incomplete(vec![Suggestion::new(cursor.input(), hint, help_text)]),
    }
}

/// Match a list argument against its candidate items.
///
/// The longest item already typed in full (followed by a space) completes
/// the argument, the first declared winning between equal lengths.
/// Otherwise every item starting with the typed text is suggested.
pub fn match_list<'a>(items: &[ListItem], help_text: &str, cursor: Cursor<'a>) -> ArgOutcome<'a> {
    let (sep, typed) = strip_separator(cursor.remaining());

    let mut best: Option<&ListItem> = None;
    for item in items {
        let typed_in_full = typed
            .strip_prefix(item.item.as_str())
            .is_some_and(|rest| rest.starts_with(SEPARATOR));
        if typed_in_full && best.is_none_or(|b| item.item.len() > b.item.len()) {
            best = Some(item);
        }
    }
    if let Some(item) = best {
        return ArgOutcome::Complete(cursor.advance(sep + item.item.len() + 1));
    }

    let suggestions = items
        .iter()
        .filter(|item| item.item.starts_with(typed))
        .map(|item| Suggestion::new(cursor.complete_with(&item.item), &item.hint, help_text))
        .collect();
    ArgOutcome::Incomplete(suggestions)
}
