//! Terminal front end for element lookups.
//!
//! # Responsibility
//! - Capture queries from argv or an interactive prompt.
//! - Render the status message and result surface as text or JSON.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use element_lookup_core::{
    default_log_level, init_logging, render_text, ElementRecord, LookupSession, MatchKind,
    Resolution, INITIAL_PROMPT,
};
use log::info;
use serde::Serialize;

const PROMPT: &str = "> ";
const QUIT_COMMAND: &str = ":q";

#[derive(Debug, Parser)]
#[command(name = "element_lookup")]
#[command(version)]
#[command(about = "Look up a chemical element by symbol, name, atomic number, or atomic mass")]
struct Cli {
    /// Query to resolve; words are joined with spaces. Omit for interactive mode
    query: Vec<String>,
    /// Print the resolution as JSON
    #[arg(long)]
    json: bool,
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long)]
    log_dir: Option<String>,
}

/// JSON shape of one resolution.
#[derive(Debug, Serialize)]
struct LookupOutput<'a> {
    query: &'a str,
    message: &'static str,
    #[serde(rename = "match")]
    match_kind: Option<MatchKind>,
    element: Option<&'a ElementRecord>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir).context("failed to initialize logging")?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.query.is_empty() {
        info!("event=cli_start module=cli status=ok mode=interactive");
        let stdin = io::stdin();
        run_interactive(stdin.lock(), &mut out, cli.json)
    } else {
        info!("event=cli_start module=cli status=ok mode=one_shot");
        let query = cli.query.join(" ");
        let mut session = LookupSession::builtin();
        let resolution = session.submit_query(query.as_str());
        let text = format_resolution(&query, &resolution, cli.json)?;
        out.write_all(text.as_bytes())
            .context("failed to write lookup result")?;
        Ok(())
    }
}

/// Reads one query per line until EOF or `:q`.
///
/// In JSON mode no prompts are written, so the output is one JSON object per
/// line.
fn run_interactive<R: BufRead, W: Write>(mut input: R, out: &mut W, json: bool) -> Result<()> {
    let mut session = LookupSession::builtin();
    if !json {
        writeln!(out, "{INITIAL_PROMPT}").context("failed to write prompt")?;
    }

    let mut line = String::new();
    loop {
        if !json {
            write!(out, "{PROMPT}").context("failed to write prompt")?;
            out.flush().context("failed to flush stdout")?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read query from stdin")?;
        if read == 0 {
            break;
        }

        let query = line.trim_end_matches(['\n', '\r']);
        if query.trim() == QUIT_COMMAND {
            break;
        }

        let resolution = session.submit_query(query);
        let text = format_resolution(query, &resolution, json)?;
        out.write_all(text.as_bytes())
            .context("failed to write lookup result")?;
    }

    Ok(())
}

/// Renders a resolution as the text surface or as one JSON line.
fn format_resolution(query: &str, resolution: &Resolution<'_>, json: bool) -> Result<String> {
    if json {
        let output = LookupOutput {
            query,
            message: resolution.message(),
            match_kind: resolution.match_kind(),
            element: resolution.record,
        };
        let mut text =
            serde_json::to_string(&output).context("failed to serialize lookup result")?;
        text.push('\n');
        return Ok(text);
    }

    let mut text = format!("{}\n{}", resolution.message(), render_text(resolution.record));
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
