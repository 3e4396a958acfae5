//! Scanner module.
//!
//! The automaton is split by state:
//! - `core` - Scanner struct, main loop, trace recording and flush
//! - `start` - `Start` state dispatch, operators and separators
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number lexing
//! - `string` - Quoted string lexing
//! - `comment` - Line and block comments

mod comment;
mod core;
mod identifier;
mod number;
mod start;
mod string;

pub use self::core::{scan, scan_with, ScanResult, Scanner};
