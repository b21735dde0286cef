//! Diagnostics for the slash-complete engine.
//!
//! Provides [`Diagnostic`], [`Severity`] and [`Span`] used to report
//! recoverable problems found while suggesting (a dynamic list that could not
//! be fetched, a skipped named argument) and structural problems found by
//! command tree checks. Diagnostic codes are defined in the [`codes`] module.

/// Diagnostic ID constants.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Hard error: the command tree is unusable as written.
    Error,
    /// Warning: suggestions may be degraded.
    Warn,
    /// Informational note.
    Info,
}

/// Byte span in the user input (or in a command path for tree checks).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character (0-based).
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "Span end ({end}) < start ({start})");
        Self { start, end }
    }

    /// Create a zero-width span at the given position.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Number of bytes covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A diagnostic message produced by the engine or by tree checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"SC1001"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable diagnostic message.
    pub message: String,
    /// Optional byte span in the input that this diagnostic relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Machine-readable context for tooling (e.g. `"source"`, `"path"`).
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Error, message, span)
    }

    /// Shorthand for a `Warn` diagnostic.
    pub fn warn(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Warn, message, span)
    }

    /// Shorthand for an `Info` diagnostic.
    pub fn info(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Info, message, span)
    }

    /// Attach machine-readable context metadata (builder pattern).
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Returns the human-readable explanation for this diagnostic's code, if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    Some(match id {
        codes::FETCH_FAILED => {
            "A dynamic list argument could not be fetched from its source. The argument is \
             skipped as if it were already typed, so the command offers no suggestions for it."
        }
        codes::FETCH_MALFORMED => {
            "A dynamic list source responded, but the body was not a JSON array of list items \
             ({\"item\", \"hint\", \"helpText\"}). The argument is skipped."
        }
        codes::NAMED_ARGUMENT_UNSUPPORTED => {
            "Named arguments are not parsed. They are neither consumed nor suggested; only \
             positional arguments (with an empty name) take part in autocomplete."
        }
        codes::EMPTY_TRIGGER => "Every command node needs a non-empty trigger.",
        codes::TRIGGER_WHITESPACE => {
            "Triggers are matched one space-delimited token at a time, so a trigger containing \
             whitespace can never be completed."
        }
        codes::TRIGGER_NOT_LOWERCASE => {
            "Trigger matching is case-sensitive. Uppercase triggers are legal but users rarely \
             type them."
        }
        codes::ARGUMENTS_WITH_SUBCOMMANDS => {
            "A node with arguments never descends into its sub-commands, so declaring both \
             leaves the sub-commands unreachable."
        }
        codes::EMPTY_STATIC_LIST => {
            "A static list argument with no items can never be completed or suggested."
        }
        codes::EMPTY_FETCH_URL => "A dynamic list argument needs a fetch source to load items from.",
        _ => return None,
    })
}
