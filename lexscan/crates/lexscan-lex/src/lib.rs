//! lexscan-lex - Table-driven lexical scanner
//!
//! This crate turns a source string into classified tokens by walking it
//! once through an explicit state machine. Alongside the tokens it
//! records which state read each character, for diagnostics and
//! visualization.
//!
//! # Example Usage
//!
//! ```
//! use lexscan_lex::{scan, ScanState, Token, TokenKind};
//!
//! let result = scan("var x = 3.14; // pi");
//!
//! assert_eq!(result.tokens[0], Token::new(TokenKind::Keyword, "var"));
//! assert_eq!(result.tokens[3], Token::new(TokenKind::Number, "3.14"));
//! assert_eq!(result.tokens[5], Token::new(TokenKind::Comment, "// pi"));
//!
//! // One trace entry per input character.
//! assert_eq!(result.trace.len(), 19);
//! assert_eq!(result.trace[1].state, ScanState::Identifier);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind, scanner state and trace entry types
//! - [`rules`] - Keyword, operator and separator tables
//! - [`scanner`] - The state machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classes
//!
//! # Token Categories
//!
//! With the standard rules:
//!
//! - **Keyword**: `var`, `print`, `if`, `else`, `while`, `function`, `return`
//! - **Identifier**: `[a-zA-Z_][a-zA-Z0-9_]*` that is not a keyword
//! - **Number**: `[0-9][0-9.]*`
//! - **String**: `"..."` or `'...'`, no escapes
//! - **Operator**: `+ - * / = == != > < >= <=`
//! - **Separator**: `; ( ) { }`
//! - **Comment**: `// ...` to end of line, `/* ... */`
//! - **Unknown**: any other single character
//!
//! # Dropped Lexemes
//!
//! A string or block comment still open at end of input produces no
//! token. [`scan_with`] reports each such loss as a warning to a
//! [`lexscan_util::Handler`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod rules;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use rules::{RuleError, RuleResult, RuleTables};
pub use scanner::{scan, scan_with, ScanResult, Scanner};
pub use token::{ScanState, StateTraceEntry, Token, TokenKind};
