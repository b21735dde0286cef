//! Terminal rendering for suggestions and diagnostics.
//!
//! Diagnostics with a span are drawn with ariadne against the user input;
//! tree-check diagnostics carry a node path instead and print as plain lines.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use slash_complete_core::Suggestion;
use slash_complete_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, human-oriented output.
    Pretty,
    /// Machine-readable JSON on stdout.
    Json,
}

impl Format {
    /// Use the explicit choice, else pretty for a TTY and JSON for a pipe.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: &Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Info => ReportKind::Advice,
        _ => ReportKind::Warning,
    }
}

fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Info => Color::Blue,
        _ => Color::White,
    }
}

fn context_note(diag: &Diagnostic) -> Option<String> {
    let ctx = diag.context.as_ref().filter(|c| !c.is_empty())?;
    Some(
        ctx.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

// ── Diagnostics ─────────────────────────────────────────────────────────

/// Render diagnostics to stderr.
///
/// `source` is the text spans point into (the user input) and `name` labels
/// it in the report header.
pub(crate) fn render_diagnostics_pretty(source: &str, name: &str, diagnostics: &[Diagnostic]) {
    let config = Config::default().with_compact(false);
    let mut cache = (name, Source::from(source));

    for diag in diagnostics {
        let Some(span) = &diag.span else {
            eprintln!(
                "{}[{}]: {}",
                (&diag.severity).fg(severity_color(&diag.severity)),
                diag.id,
                diag.message
            );
            if let Some(note) = context_note(diag) {
                eprintln!("  = note: {note}");
            }
            if let Some(explanation) = diag.explain() {
                eprintln!("  = help: {explanation}");
            }
            continue;
        };

        // Spans index the input; clamp in case the caller passed other text.
        let start = span.start.min(source.len());
        let end = span.end.min(source.len()).max(start);

        let mut builder = Report::build(report_kind(&diag.severity), (name, start..end))
            .with_code(diag.id.as_ref())
            .with_message(&diag.message)
            .with_config(config)
            .with_label(
                Label::new((name, start..end))
                    .with_message(context_note(diag).unwrap_or_else(|| diag.message.clone()))
                    .with_color(severity_color(&diag.severity)),
            );
        if let Some(explanation) = diag.explain() {
            builder = builder.with_help(explanation);
        }
        builder.finish().eprint(&mut cache).ok();
    }
}

/// Print a coloured `2 errors, 1 warning, 0 info` line to stderr.
pub(crate) fn print_summary(diagnostics: &[Diagnostic]) {
    let (mut errors, mut warnings, mut infos) = (0usize, 0usize, 0usize);
    for d in diagnostics {
        match d.severity {
            Severity::Error => errors += 1,
            Severity::Info => infos += 1,
            _ => warnings += 1,
        }
    }
    if errors + warnings + infos == 0 {
        return;
    }

    let mut parts = Vec::new();
    if errors > 0 {
        let s = if errors == 1 { "" } else { "s" };
        parts.push(format!("{}", format!("{errors} error{s}").fg(Color::Red)));
    }
    if warnings > 0 {
        let s = if warnings == 1 { "" } else { "s" };
        parts.push(format!(
            "{}",
            format!("{warnings} warning{s}").fg(Color::Yellow)
        ));
    }
    if infos > 0 {
        parts.push(format!("{}", format!("{infos} info").fg(Color::Blue)));
    }
    eprintln!("{}", parts.join(", "));
}

// ── Suggestions ─────────────────────────────────────────────────────────

/// Print suggestions as aligned `completion  hint  description` rows on stdout.
pub(crate) fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        eprintln!("{}", "no suggestions".fg(Color::Fixed(8)));
        return;
    }
    let text_w = column_width(suggestions.iter().map(|s| s.completed_text.as_str()));
    let hint_w = column_width(suggestions.iter().map(|s| s.hint.as_str()));
    for s in suggestions {
        let row = format!(
            "{:<text_w$}  {:<hint_w$}  {}",
            s.completed_text, s.hint, s.description
        );
        println!("{}", row.trim_end());
    }
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|c| c.chars().count()).max().unwrap_or(0)
}
