//! Rules command implementation.
//!
//! Prints the keyword, operator and separator tables in effect after
//! configuration is applied.

use serde_json::json;

use lexscan_lex::RuleTables;

use crate::commands::common::OutputFormat;
use crate::commands::traits::{Command, CommandResult};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the rules command.
#[derive(Debug, Clone, Default)]
pub struct RulesArgs {
    /// Output format override.
    pub format: Option<OutputFormat>,
}

/// Rules command handler.
pub struct RulesCommand {
    args: RulesArgs,
    config: Config,
}

impl Command for RulesCommand {
    type Args = RulesArgs;

    fn new(args: RulesArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<CommandResult> {
        let rules = self.config.rule_tables()?;
        let data = match self.args.format.unwrap_or(self.config.output.format) {
            OutputFormat::Table => render_table(&rules),
            OutputFormat::Json => render_json(&rules)?,
        };
        Ok(CommandResult::success(data))
    }

    fn name() -> &'static str {
        "rules"
    }
}

fn render_table(rules: &RuleTables) -> String {
    let keywords: Vec<_> = rules.keywords().collect();
    let operators: Vec<_> = rules.operators().collect();
    let separators: Vec<_> = rules.separators().map(String::from).collect();

    format!(
        "Keywords:   {}\nOperators:  {}\nSeparators: {}\n",
        keywords.join(" "),
        operators.join(" "),
        separators.join(" ")
    )
}

fn render_json(rules: &RuleTables) -> Result<String> {
    let value = json!({
        "keywords": rules.keywords().collect::<Vec<_>>(),
        "operators": rules.operators().collect::<Vec<_>>(),
        "separators": rules.separators().collect::<Vec<_>>(),
    });
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

/// Run the rules command.
pub fn run_rules(args: RulesArgs, config: Config) -> Result<CommandResult> {
    RulesCommand::new(args, config).execute()
}
