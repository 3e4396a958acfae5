//! Configuration module for the lexscan CLI.
//!
//! This module handles loading, saving, and resolving configuration
//! settings, including optional custom rule tables.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use lexscan_lex::rules::{KEYWORDS, OPERATORS, SEPARATORS};
use lexscan_lex::RuleTables;
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{LexscanError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lexscan.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Output rendering options.
    #[serde(default)]
    pub output: OutputConfig,

    /// Scanning options.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Custom rule tables. The standard tables are used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesConfig>,
}

/// Output rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Show newline characters as `\n` in table output.
    #[serde(default = "default_true")]
    pub escape_newlines: bool,
}

/// Scanning options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Number of worker threads used when scanning several files.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

/// Custom keyword, operator and separator lists.
///
/// A list left out of the file keeps its standard contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RulesConfig {
    /// Reserved words.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// One- and two-character operators.
    #[serde(default = "default_operators")]
    pub operators: Vec<String>,

    /// Single-character separators.
    #[serde(default = "default_separators")]
    pub separators: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_jobs() -> usize {
    get_num_cpus()
}

fn default_keywords() -> Vec<String> {
    KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_operators() -> Vec<String> {
    OPERATORS.iter().map(|o| o.to_string()).collect()
}

fn default_separators() -> Vec<String> {
    SEPARATORS.iter().map(|s| s.to_string()).collect()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            escape_newlines: true,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            operators: default_operators(),
            separators: default_separators(),
        }
    }
}

impl RulesConfig {
    /// Validate the lists and build rule tables from them.
    pub fn to_tables(&self) -> Result<RuleTables> {
        Ok(RuleTables::new(
            &self.keywords,
            &self.operators,
            &self.separators,
        )?)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/lexscan/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexscanError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            LexscanError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            LexscanError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// The rule tables this configuration selects.
    ///
    /// Without a `[rules]` section this is the process-wide standard set.
    pub fn rule_tables(&self) -> Result<Cow<'static, RuleTables>> {
        match &self.rules {
            Some(rules) => Ok(Cow::Owned(rules.to_tables()?)),
            None => Ok(Cow::Borrowed(RuleTables::standard())),
        }
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lexscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lexscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
