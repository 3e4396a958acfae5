//! Identifier and keyword lexing.

use super::Scanner;
use crate::classify::is_ident_continue;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Handles one character in the `Identifier` state.
    ///
    /// The character that ends the word is left for `Start` to read.
    pub(super) fn step_identifier(&mut self) {
        match self.cursor.current() {
            Some(c) if is_ident_continue(c) => {
                self.consume_into_buffer();
            },
            _ => self.finish_word(),
        }
    }

    /// Emits the buffered word as a keyword or an identifier.
    ///
    /// Only an exact match against the keyword table makes a keyword, so
    /// `variable` stays an identifier even though it starts with `var`.
    pub(super) fn finish_word(&mut self) {
        let kind = if self.rules.is_keyword(&self.buffer) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.finish(kind);
    }
}
