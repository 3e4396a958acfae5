//! Comment lexing.
//!
//! Once the Comment state is entered it runs to the end of the comment in
//! a single step. Block comments do not nest.

use super::Scanner;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Handles the `Comment` state.
    ///
    /// The buffer holds the opening `/`; the character under the cursor
    /// decides between a line comment (`/`) and a block comment (`*`).
    pub(super) fn step_comment(&mut self) {
        if self.cursor.current() == Some('*') {
            self.scan_block_comment();
        } else {
            self.scan_line_comment();
        }
    }

    /// Reads up to, but not including, the next newline.
    fn scan_line_comment(&mut self) {
        while self.cursor.current().is_some_and(|c| c != '\n') {
            self.consume_into_buffer();
        }
        self.finish(TokenKind::Comment);
    }

    /// Reads through the first `*/` after the opening `/*`.
    ///
    /// At end of input the buffer is left pending so the flush can drop it.
    fn scan_block_comment(&mut self) {
        // The opening `*` cannot also close the comment.
        self.consume_into_buffer();

        loop {
            match (self.cursor.current(), self.cursor.peek()) {
                (Some('*'), Some('/')) => {
                    self.consume_into_buffer();
                    self.consume_into_buffer();
                    self.finish(TokenKind::Comment);
                    return;
                },
                (Some(_), _) => {
                    self.consume_into_buffer();
                },
                (None, _) => return,
            }
        }
    }
}
