//! Diagnostic ID constants.
//!
//! Use these instead of string literals so a typo is a compile error.
//! `SC1xxx` codes are emitted while suggesting, `SC2xxx` codes by command
//! tree checks.

// ── Suggestion-time ─────────────────────────────────────────────────────

/// A dynamic list source could not be reached.
pub const FETCH_FAILED: &str = "SC1001";

/// A dynamic list source answered with data that is not a list of items.
pub const FETCH_MALFORMED: &str = "SC1002";

/// A named argument was skipped; only positional arguments are parsed.
pub const NAMED_ARGUMENT_UNSUPPORTED: &str = "SC1101";

// ── Command tree checks ─────────────────────────────────────────────────

/// A command node has an empty trigger.
pub const EMPTY_TRIGGER: &str = "SC2001";

/// A trigger contains whitespace and can never be matched.
pub const TRIGGER_WHITESPACE: &str = "SC2002";

/// A trigger contains uppercase characters.
pub const TRIGGER_NOT_LOWERCASE: &str = "SC2003";

/// A node declares both arguments and sub-commands.
pub const ARGUMENTS_WITH_SUBCOMMANDS: &str = "SC2004";

/// A static list argument has no items.
pub const EMPTY_STATIC_LIST: &str = "SC2005";

/// A dynamic list argument has no fetch source.
pub const EMPTY_FETCH_URL: &str = "SC2006";

/// Every known code, in numeric order.
pub const ALL: &[&str] = &[
    FETCH_FAILED,
    FETCH_MALFORMED,
    NAMED_ARGUMENT_UNSUPPORTED,
    EMPTY_TRIGGER,
    TRIGGER_WHITESPACE,
    TRIGGER_NOT_LOWERCASE,
    ARGUMENTS_WITH_SUBCOMMANDS,
    EMPTY_STATIC_LIST,
    EMPTY_FETCH_URL,
];
