//! Command modules for the lexscan CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod init;
pub mod rules;
pub mod tokens;
pub mod trace;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use rules::{run_rules, RulesArgs};
pub use tokens::{run_tokens, TokensArgs};
pub use trace::{run_trace, TraceArgs};
