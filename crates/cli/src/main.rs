mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use slash_complete_command_tree::CommandTree;
use slash_complete_core::{ListFetcher, MapFetcher, check_tree, suggest};
use slash_complete_diagnostics::{self as diag, Diagnostic, Severity};
use slash_complete_fetch_client::{FetchConfig, HttpListFetcher};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::render::{Format, print_suggestions, print_summary, render_diagnostics_pretty};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "slashc",
    version,
    about = "slash-complete: suggest completions for slash commands and check command trees"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Log filter (e.g. "debug", "slash_complete_core=trace"). Overrides
    /// `RUST_LOG`; the default is "warn".
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Suggest completions for a partially typed command.
    Suggest {
        /// The input as typed so far (quote it to keep spaces).
        input: String,
        /// Command tree JSON file.
        #[arg(long)]
        tree: PathBuf,
        /// Caller role. Empty or "system_admin" sees every command.
        #[arg(long, default_value = "")]
        role: String,
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Check a command tree for structural problems.
    Check {
        /// Command tree JSON file.
        #[arg(long)]
        tree: PathBuf,
    },

    /// Fetch a dynamic list source once and print its items.
    Fetch {
        /// The list source, as written in a dynamic list argument.
        source: String,
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Explain a diagnostic ID (e.g. SC1001).
    Explain { id: String },
}

/// Where dynamic list items come from.
#[derive(Args, Debug)]
struct FetchArgs {
    /// Base URL that relative list sources are joined onto.
    #[arg(long)]
    base_url: Option<Url>,
    /// Connect timeout in milliseconds.
    #[arg(long)]
    connect_timeout_ms: Option<u64>,
    /// Whole-request timeout in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,
    /// Retries after the first attempt for transient failures.
    #[arg(long)]
    retries: Option<u32>,
    /// Serve lists from a JSON file (`{"source": [items]}`) instead of HTTP.
    #[arg(long, conflicts_with = "offline")]
    fixtures: Option<PathBuf>,
    /// Never fetch; every dynamic list fails as unreachable.
    #[arg(long)]
    offline: bool,
}

impl FetchArgs {
    fn config(&self) -> FetchConfig {
        let mut config = FetchConfig::default();
        config.base_url = self.base_url.clone();
        if let Some(ms) = self.connect_timeout_ms {
            config.timeouts.connect = Duration::from_millis(ms);
        }
        if let Some(ms) = self.timeout_ms {
            config.timeouts.request = Duration::from_millis(ms);
        }
        if let Some(retries) = self.retries {
            config.retry.max_attempts = retries.saturating_add(1);
        }
        config
    }

    fn build_fetcher(&self) -> Result<Box<dyn ListFetcher>> {
        if self.offline {
            return Ok(Box::new(MapFetcher::new()));
        }
        if let Some(path) = &self.fixtures {
            let json = read_file(path, "fixtures")?;
            let fetcher = MapFetcher::from_json(&json)
                .with_context(|| format!("failed to parse fixtures file '{}'", path.display()))?;
            tracing::debug!(sources = fetcher.len(), "loaded list fixtures");
            return Ok(Box::new(fetcher));
        }
        Ok(Box::new(HttpListFetcher::new(self.config())?))
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    let format = Format::resolve_or_detect(cli.output.as_deref());

    if let Err(err) = run(cli.cmd, format) {
        match format {
            Format::Json => {
                let out = serde_json::json!({
                    "success": false,
                    "error": "command_failed",
                    "message": format!("{err:#}"),
                });
                println!("{out:#}");
            }
            Format::Pretty => eprintln!("error: {err:#}"),
        }
        process::exit(1);
    }
}

fn run(cmd: Cmd, format: Format) -> Result<()> {
    match cmd {
        Cmd::Suggest {
            input,
            tree,
            role,
            fetch,
        } => cmd_suggest(&input, &tree, &role, &fetch, format),
        Cmd::Check { tree } => cmd_check(&tree, format),
        Cmd::Fetch { source, fetch } => cmd_fetch(&source, &fetch, format),
        Cmd::Explain { id } => cmd_explain(&id, format),
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_suggest(
    input: &str,
    tree_path: &Path,
    role: &str,
    fetch: &FetchArgs,
    format: Format,
) -> Result<()> {
    let tree = load_tree(tree_path)?;
    let fetcher = fetch.build_fetcher()?;
    let result = suggest(tree.commands(), input, role, fetcher.as_ref());

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        Format::Pretty => {
            print_suggestions(&result.suggestions);
            if !result.diagnostics.is_empty() {
                render_diagnostics_pretty(input, "<input>", &result.diagnostics);
                print_summary(&result.diagnostics);
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CheckReport<'a> {
    ok: bool,
    commands: usize,
    diagnostics: &'a [Diagnostic],
}

fn cmd_check(tree_path: &Path, format: Format) -> Result<()> {
    let json = read_file(tree_path, "tree")?;
    let nodes = CommandTree::nodes_from_json(&json)
        .with_context(|| format!("failed to parse tree file '{}'", tree_path.display()))?;
    let diagnostics = check_tree(&nodes);
    let ok = !diagnostics.iter().any(Diagnostic::is_error);

    match format {
        Format::Json => {
            let report = CheckReport {
                ok,
                commands: nodes.len(),
                diagnostics: &diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Pretty => {
            render_diagnostics_pretty(&json, &tree_path.display().to_string(), &diagnostics);
            print_summary(&diagnostics);
            if ok {
                use ariadne::Fmt;
                println!(
                    "{} {} top-level command(s)",
                    "ok:".fg(ariadne::Color::Green),
                    nodes.len()
                );
            }
        }
    }

    exit_on_errors(&diagnostics);
    Ok(())
}

fn cmd_fetch(source: &str, fetch: &FetchArgs, format: Format) -> Result<()> {
    let fetcher = fetch.build_fetcher()?;
    let items = fetcher
        .fetch(source)
        .with_context(|| format!("failed to fetch list '{source}'"))?;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&items)?),
        Format::Pretty => {
            let width = items.iter().map(|i| i.item.chars().count()).max().unwrap_or(0);
            for item in &items {
                let row = format!("{:<width$}  {}", item.item, item.hint);
                println!("{}", row.trim_end());
            }
            eprintln!("{} item(s)", items.len());
        }
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "id": id,
                "explanation": diag::explain(id),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            if let Some(text) = diag::explain(id) {
                use ariadne::Fmt;
                println!("{}: {}", id.fg(ariadne::Color::Cyan), text);
            } else {
                println!("{id}: (no explanation available)");
            }
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn read_file(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file '{}'", path.display()))
}

fn load_tree(path: &Path) -> Result<CommandTree> {
    let json = read_file(path, "tree")?;
    let tree = CommandTree::from_json(&json)
        .with_context(|| format!("failed to load command tree '{}'", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        commands = tree.commands().len(),
        "loaded command tree"
    );
    Ok(tree)
}

/// Exit with code 1 if any diagnostic is an error.
/// Warnings and info do not cause a non-zero exit.
fn exit_on_errors(diagnostics: &[Diagnostic]) {
    if diagnostics
        .iter()
        .any(|d| matches!(d.severity, Severity::Error))
    {
        process::exit(1);
    }
}
