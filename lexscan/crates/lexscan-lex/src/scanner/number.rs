//! Number lexing.

use super::Scanner;
use crate::classify::is_number_continue;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Handles one character in the `Number` state.
    ///
    /// Digits and dots are accepted in any arrangement; `1.2.3` is a single
    /// number. No value is computed, so there is no overflow.
    pub(super) fn step_number(&mut self) {
        match self.cursor.current() {
            Some(c) if is_number_continue(c) => {
                self.consume_into_buffer();
            },
            _ => self.finish(TokenKind::Number),
        }
    }
}
