//! Common types and utilities for lexscan commands.
//!
//! Input reading, parallel scanning and plain-text rendering shared by the
//! `tokens` and `trace` commands.

use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

use lexscan_lex::{scan_with, RuleTables, ScanResult};
use lexscan_util::{Diagnostic, Handler};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::{LexscanError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned two-column text
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

// ============================================================================
// Inputs
// ============================================================================

/// File argument that selects standard input.
pub const STDIN_ARG: &str = "-";

/// Name shown for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// A named source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// File path, or [`STDIN_NAME`]
    pub name: String,
    /// Full contents
    pub text: String,
}

/// An input after scanning, with the warnings its scan produced.
#[derive(Debug)]
pub struct ScannedInput {
    /// Name of the input
    pub name: String,
    /// Tokens and trace
    pub result: ScanResult,
    /// Dropped-lexeme warnings
    pub diagnostics: Vec<Diagnostic>,
}

/// Read every input named on the command line.
///
/// An empty list, or the argument `-`, reads standard input. Standard
/// input can only be read once, so `-` may appear at most once.
pub fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    if files.iter().filter(|path| path.as_os_str() == STDIN_ARG).count() > 1 {
        return Err(LexscanError::Validation(
            error_messages::STDIN_REPEATED.to_string(),
        ));
    }

    files
        .iter()
        .map(|path| {
            if path.as_os_str() == STDIN_ARG {
                read_stdin()
            } else {
                read_file(path)
            }
        })
        .collect()
}

fn read_stdin() -> Result<Input> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(Input {
        name: STDIN_NAME.to_string(),
        text,
    })
}

fn read_file(path: &Path) -> Result<Input> {
    if !path.is_file() {
        return Err(LexscanError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        LexscanError::FileOperation(format!("{}: {}", path.display(), e))
    })?;
    Ok(Input {
        name: path.display().to_string(),
        text,
    })
}

// ============================================================================
// Scanning
// ============================================================================

/// Resolve the worker count from the `--jobs` flag and configuration.
pub fn resolve_jobs(flag: Option<usize>, config: &Config) -> Result<usize> {
    match flag.unwrap_or(config.scan.jobs) {
        0 => Err(LexscanError::Validation(
            error_messages::ZERO_JOBS.to_string(),
        )),
        jobs => Ok(jobs),
    }
}

/// Scan all inputs on a pool of `jobs` threads.
///
/// Results come back in input order. Every worker reads the same rule
/// tables; each scan gets its own diagnostic handler.
pub fn scan_inputs(inputs: Vec<Input>, rules: &RuleTables, jobs: usize) -> Result<Vec<ScannedInput>> {
    let jobs = jobs.min(inputs.len()).max(1);
    debug!(inputs = inputs.len(), jobs, "scanning inputs");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| LexscanError::Config(format!("Failed to start worker pool: {}", e)))?;

    Ok(pool.install(|| {
        inputs
            .into_par_iter()
            .map(|input| scan_input(input, rules))
            .collect()
    }))
}

fn scan_input(input: Input, rules: &RuleTables) -> ScannedInput {
    let handler = Handler::new();
    let result = scan_with(&input.text, rules, &handler);
    debug!(
        name = %input.name,
        tokens = result.tokens.len(),
        "scanned input"
    );
    ScannedInput {
        name: input.name,
        result,
        diagnostics: handler.take_diagnostics(),
    }
}

/// Format the warnings of every scanned input for stderr.
///
/// Each diagnostic is followed by a line naming the input it came from.
pub fn collect_warnings(scanned: &[ScannedInput]) -> Vec<String> {
    scanned
        .iter()
        .flat_map(|input| {
            input
                .diagnostics
                .iter()
                .map(move |d| format!("{}\n  --> {}", d, input.name))
        })
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

/// Replace newline characters with the visible escape `\n`.
pub fn escape_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(text.replace('\n', "\\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Render a two-column table with a header row and a rule under it.
pub fn render_table<I>(headers: [&str; 2], rows: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let rows: Vec<_> = rows.into_iter().collect();
    let width = rows
        .iter()
        .map(|(left, _)| left.chars().count())
        .chain(std::iter::once(headers[0].len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    push_row(&mut out, headers[0], headers[1], width);
    push_row(&mut out, &"-".repeat(width), &"-".repeat(headers[1].len()), width);
    for (left, right) in &rows {
        push_row(&mut out, left, right, width);
    }
    out
}

fn push_row(out: &mut String, left: &str, right: &str, width: usize) {
    let pad = width.saturating_sub(left.chars().count());
    out.push_str(left);
    out.extend(std::iter::repeat(' ').take(pad + 2));
    out.push_str(right);
    out.push('\n');
}

/// Join per-input sections, adding a `==> name <==` header when there is
/// more than one.
pub fn join_sections(sections: Vec<(String, String)>) -> String {
    if sections.len() == 1 {
        return sections.into_iter().map(|(_, body)| body).collect();
    }

    sections
        .into_iter()
        .map(|(name, body)| format!("==> {} <==\n{}", name, body))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when an input path is missing or a directory.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a readable file";

    /// Error when `-` is given more than once.
    pub const STDIN_REPEATED: &str = "Standard input (`-`) can only be given once";

    /// Error when the worker count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when init would overwrite a configuration file.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force)";

    /// Error when the init target is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory";
}
