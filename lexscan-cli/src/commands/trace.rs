//! Trace command implementation.
//!
//! Prints, for every input character, the scanner state that read it.

use std::path::PathBuf;

use serde::Serialize;

use lexscan_lex::StateTraceEntry;

use crate::commands::common::{
    collect_warnings, escape_newlines, join_sections, read_inputs, render_table, resolve_jobs,
    scan_inputs, OutputFormat, ScannedInput,
};
use crate::commands::traits::{Command, CommandResult};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the trace command.
#[derive(Debug, Clone, Default)]
pub struct TraceArgs {
    /// Files to scan; empty means stdin.
    pub files: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Worker count override.
    pub jobs: Option<usize>,
}

#[derive(Serialize)]
struct FileTrace<'a> {
    file: &'a str,
    trace: &'a [StateTraceEntry],
}

/// Trace command handler.
pub struct TraceCommand {
    args: TraceArgs,
    config: Config,
}

impl Command for TraceCommand {
    type Args = TraceArgs;

    fn new(args: TraceArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<CommandResult> {
        let rules = self.config.rule_tables()?;
        let jobs = resolve_jobs(self.args.jobs, &self.config)?;
        let inputs = read_inputs(&self.args.files)?;
        let scanned = scan_inputs(inputs, &rules, jobs)?;

        let data = match self.args.format.unwrap_or(self.config.output.format) {
            OutputFormat::Table => render_tables(&scanned),
            OutputFormat::Json => render_json(&scanned)?,
        };

        Ok(CommandResult::success(data)
            .with_items_processed(scanned.len())
            .with_warnings(collect_warnings(&scanned)))
    }

    fn name() -> &'static str {
        "trace"
    }
}

/// Newlines are always escaped here: a raw one would split a table row.
fn render_tables(scanned: &[ScannedInput]) -> String {
    let sections = scanned
        .iter()
        .map(|input| {
            let rows = input.result.trace.iter().map(|entry| {
                let mut buf = [0u8; 4];
                let character = escape_newlines(entry.character.encode_utf8(&mut buf)).into_owned();
                (character, entry.state.to_string())
            });
            (input.name.clone(), render_table(["Character", "State"], rows))
        })
        .collect();
    join_sections(sections)
}

fn render_json(scanned: &[ScannedInput]) -> Result<String> {
    let mut json = match scanned {
        [single] => serde_json::to_string_pretty(&single.result.trace)?,
        _ => {
            let files: Vec<_> = scanned
                .iter()
                .map(|input| FileTrace {
                    file: &input.name,
                    trace: &input.result.trace,
                })
                .collect();
            serde_json::to_string_pretty(&files)?
        },
    };
    json.push('\n');
    Ok(json)
}

/// Run the trace command.
pub fn run_trace(args: TraceArgs, config: Config) -> Result<CommandResult> {
    TraceCommand::new(args, config).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_on(text: &str, format: OutputFormat) -> CommandResult {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, text).unwrap();
        let args = TraceArgs {
            files: vec![path],
            format: Some(format),
            jobs: Some(1),
        };
        run_trace(args, Config::default()).unwrap()
    }

    #[test]
    fn test_trace_table() {
        let result = run_on("ab 1", OutputFormat::Table);
        let expected = [
            "Character  State",
            "---------  -----",
            "a          Start",
            "b          Identifier",
            "           Start",
            "1          Start",
        ];
        assert_eq!(result.data.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_trace_escapes_newline() {
        let result = run_on("x\ny", OutputFormat::Table);
        let lines: Vec<_> = result.data.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "\\n         Start");
    }

    #[test]
    fn test_trace_json() {
        let result = run_on("=\n", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&result.data).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "character": "=", "state": "Start" },
                { "character": "\n", "state": "Start" },
            ])
        );
    }

    #[test]
    fn test_trace_covers_dropped_text() {
        let result = run_on("'abc", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&result.data).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
        assert_eq!(value[3]["state"], "String");
        assert_eq!(result.warnings.len(), 1);
    }
}
