//! Command trait and result type for the lexscan CLI.
//!
//! Commands render their output into a [`CommandResult`] instead of
//! writing directly, so the dispatcher in `main` owns stdout and stderr.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all lexscan commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<CommandResult>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Rendered output of a command run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Text for stdout.
    pub data: String,

    /// Number of inputs scanned.
    pub items_processed: usize,

    /// Warning messages for stderr.
    pub warnings: Vec<String>,
}

impl CommandResult {
    /// Create a result carrying `data`.
    pub fn success(data: String) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Set the number of inputs processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Add warning messages.
    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    /// Write the data to `out` and the warnings to `err`.
    pub fn emit(&self, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
        out.write_all(self.data.as_bytes())?;
        out.flush()?;
        for warning in &self.warnings {
            writeln!(err, "{}", warning)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_result_default() {
        let result = CommandResult::default();
        assert!(result.data.is_empty());
        assert_eq!(result.items_processed, 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_command_result_with_methods() {
        let result = CommandResult::success("out\n".to_string())
            .with_items_processed(2)
            .with_warnings(vec!["w1".to_string(), "w2".to_string()]);

        assert_eq!(result.data, "out\n");
        assert_eq!(result.items_processed, 2);
        assert_eq!(result.warnings, ["w1", "w2"]);
    }

    #[test]
    fn test_emit_splits_streams() {
        let result = CommandResult::success("data\n".to_string())
            .with_warnings(vec!["careful".to_string()]);
        let mut out = Vec::new();
        let mut err = Vec::new();
        result.emit(&mut out, &mut err).unwrap();

        assert_eq!(out, b"data\n");
        assert_eq!(err, b"careful\n");
    }
}
