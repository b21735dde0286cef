//! Token scanning over the raw user input.
//!
//! The input is never tokenized up front. Instead a [`Cursor`] marks how much
//! of it has been consumed, and the helpers here find the next token boundary
//! in the unconsumed part. Every boundary is an ASCII space or quote, so
//! offsets produced here always land on UTF-8 character boundaries.

use slash_complete_diagnostics::Span;

/// Separator between tokens.
pub const SEPARATOR: char = ' ';

/// Delimiter for multi-word text values.
pub const QUOTE: char = '"';

/// Split point in the user input: everything before `pos` has been consumed.
///
/// Advancing only moves the split point, so `parsed() + remaining()` is
/// always the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// A cursor with the first `pos` bytes already consumed.
    ///
    /// Returns `None` if `pos` is past the end or not on a char boundary.
    pub fn at(input: &'a str, pos: usize) -> Option<Self> {
        input.is_char_boundary(pos).then_some(Self { input, pos })
    }

    /// The whole input.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the split point.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The consumed prefix.
    pub fn parsed(&self) -> &'a str {
        &self.input[..self.pos]
    }

    /// The unconsumed suffix.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume `len` more bytes of the remaining input.
    pub(crate) fn advance(self, len: usize) -> Self {
        debug_assert!(self.pos + len <= self.input.len());
        Self {
            input: self.input,
            pos: self.pos + len,
        }
    }

    /// The consumed prefix followed by `tail`.
    pub fn complete_with(&self, tail: &str) -> String {
        let mut out = String::with_capacity(self.pos + tail.len());
        out.push_str(self.parsed());
        out.push_str(tail);
        out
    }

    /// Span of the unconsumed suffix.
    pub fn remaining_span(&self) -> Span {
        Span::new(self.pos, self.input.len())
    }
}

/// Byte offset of the first separator in `s`.
pub fn next_space(s: &str) -> Option<usize> {
    s.find(SEPARATOR)
}

/// Drop at most one leading separator.
///
/// Returns how many bytes were dropped (0 or 1) and the rest.
pub fn strip_separator(s: &str) -> (usize, &str) {
    match s.strip_prefix(SEPARATOR) {
        Some(rest) => (1, rest),
        None => (0, s),
    }
}

/// How a text span relates to quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoted {
    /// The span does not start with a quote.
    NotQuoted,
    /// The span opens a quote that is never closed.
    Unterminated,
    /// The quoted value is complete.
    Closed {
        /// Bytes covered by the opening quote, the value, the closing
        /// quote, and one trailing separator if present.
        len: usize,
    },
}

/// Classify `s` as a quoted multi-word value.
pub fn quoted_span(s: &str) -> Quoted {
    let Some(body) = s.strip_prefix(QUOTE) else {
        return Quoted::NotQuoted;
    };
    match body.find(QUOTE) {
        None => Quoted::Unterminated,
        Some(q) => {
            let mut len = q + 2;
            if s[len..].starts_with(SEPARATOR) {
                len += 1;
            }
            Quoted::Closed { len }
        }
    }
}
