//! Tokens command implementation.
//!
//! Scans each input and prints its token stream as a `Type`/`Value` table
//! or as JSON.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use lexscan_lex::Token;

use crate::commands::common::{
    collect_warnings, escape_newlines, join_sections, read_inputs, render_table, resolve_jobs,
    scan_inputs, OutputFormat, ScannedInput,
};
use crate::commands::traits::{Command, CommandResult};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to scan; empty means stdin.
    pub files: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Worker count override.
    pub jobs: Option<usize>,
}

/// JSON shape of one input when several are scanned.
#[derive(Serialize)]
struct FileTokens<'a> {
    file: &'a str,
    tokens: &'a [Token],
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<CommandResult> {
        let rules = self.config.rule_tables()?;
        let jobs = resolve_jobs(self.args.jobs, &self.config)?;
        let inputs = read_inputs(&self.args.files)?;
        let scanned = scan_inputs(inputs, &rules, jobs)?;

        let data = match self.args.format.unwrap_or(self.config.output.format) {
            OutputFormat::Table => self.render_tables(&scanned),
            OutputFormat::Json => render_json(&scanned)?,
        };
        debug!(command = Self::name(), inputs = scanned.len(), "command finished");

        Ok(CommandResult::success(data)
            .with_items_processed(scanned.len())
            .with_warnings(collect_warnings(&scanned)))
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl TokensCommand {
    fn render_tables(&self, scanned: &[ScannedInput]) -> String {
        let escape = self.config.output.escape_newlines;
        let sections = scanned
            .iter()
            .map(|input| {
                let rows = input.result.tokens.iter().map(|token| {
                    let value = if escape {
                        escape_newlines(token.value()).into_owned()
                    } else {
                        token.value().to_string()
                    };
                    (token.kind().to_string(), value)
                });
                (input.name.clone(), render_table(["Type", "Value"], rows))
            })
            .collect();
        join_sections(sections)
    }
}

/// A single input renders as a bare token array; several render as an
/// array of `{ file, tokens }` objects.
fn render_json(scanned: &[ScannedInput]) -> Result<String> {
    let mut json = match scanned {
        [single] => serde_json::to_string_pretty(&single.result.tokens)?,
        _ => {
            let files: Vec<_> = scanned
                .iter()
                .map(|input| FileTokens {
                    file: &input.name,
                    tokens: &input.result.tokens,
                })
                .collect();
            serde_json::to_string_pretty(&files)?
        },
    };
    json.push('\n');
    Ok(json)
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<CommandResult> {
    TokensCommand::new(args, config).execute()
}
