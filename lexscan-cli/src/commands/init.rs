//! Init command implementation.
//!
//! Writes a `lexscan.toml` holding the effective configuration, with the
//! standard rule tables spelled out so they can be edited.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::common::error_messages;
use crate::commands::traits::{Command, CommandResult};
use crate::config::{Config, RulesConfig, CONFIG_FILE_NAME};
use crate::error::{LexscanError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
    config: Config,
}

impl Command for InitCommand {
    type Args = InitArgs;

    fn new(args: InitArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<CommandResult> {
        let target = self.target_file()?;

        if target.exists() && !self.args.force {
            return Err(LexscanError::Validation(format!(
                "{}: {}",
                error_messages::CONFIG_EXISTS,
                target.display()
            )));
        }

        let mut config = self.config.clone();
        config.rules.get_or_insert_with(RulesConfig::default);
        config.save_to_path(&target)?;
        info!(path = %target.display(), "wrote configuration");

        Ok(CommandResult::success(format!("{}\n", target.display())).with_items_processed(1))
    }

    fn name() -> &'static str {
        "init"
    }
}

impl InitCommand {
    fn target_file(&self) -> Result<PathBuf> {
        let dir = self.args.path.as_deref().unwrap_or_else(|| Path::new("."));
        if dir.exists() && !dir.is_dir() {
            return Err(LexscanError::Validation(format!(
                "{}: {}",
                error_messages::TARGET_NOT_DIR,
                dir.display()
            )));
        }
        Ok(dir.join(CONFIG_FILE_NAME))
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs, config: Config) -> Result<CommandResult> {
    InitCommand::new(args, config).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexscan_lex::RuleTables;
    use tempfile::TempDir;

    fn init_in(dir: &Path, force: bool) -> Result<CommandResult> {
        let args = InitArgs {
            path: Some(dir.to_path_buf()),
            force,
        };
        run_init(args, Config::default())
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        init_in(temp_dir.path(), false).unwrap();

        let loaded = Config::load_from_path(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(&*loaded.rule_tables().unwrap(), RuleTables::standard());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        init_in(&nested, false).unwrap();
        assert!(nested.join(CONFIG_FILE_NAME).is_file());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        init_in(temp_dir.path(), false).unwrap();

        let err = init_in(temp_dir.path(), false).unwrap_err();
        assert!(matches!(err, LexscanError::Validation(_)));
        assert!(init_in(temp_dir.path(), true).is_ok());
    }

    #[test]
    fn test_init_rejects_file_target() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let err = init_in(&file, false).unwrap_err();
        assert!(matches!(err, LexscanError::Validation(_)));
    }
}
