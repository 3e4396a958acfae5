//! Quoted string lexing.
//!
//! Strings have no escape sequences: the first character equal to the
//! opening quote closes the literal. The other quote kind may appear
//! freely inside.

use super::Scanner;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Handles one character in the `String` state.
    pub(super) fn step_string(&mut self) {
        let Some(c) = self.consume_into_buffer() else {
            return;
        };
        if Some(c) == self.quote {
            self.finish(TokenKind::String);
        }
    }
}
