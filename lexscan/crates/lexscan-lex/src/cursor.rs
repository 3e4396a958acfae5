//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which walks the source one
//! character at a time. It keeps two positions in step: the byte offset
//! used for slicing and the character index used for reporting.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use lexscan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
///
/// assert_eq!(cursor.current(), Some('v'));
/// assert_eq!(cursor.advance(), Some('v'));
/// assert_eq!(cursor.current(), Some('a'));
/// assert_eq!(cursor.index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Number of characters consumed so far.
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            index: 0,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        // Fast path for ASCII (most common case)
        match self.source.as_bytes().get(self.position) {
            None => None,
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.remaining().chars().next(),
        }
    }

    /// Returns the character after the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use lexscan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek(), Some('*'));
    /// assert_eq!(Cursor::new("/").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    /// Returns the slice holding the next `count` characters, or `None`
    /// if fewer than `count` characters remain.
    ///
    /// The slice borrows the source, so candidate operators can be looked
    /// up without building a new string.
    ///
    /// # Example
    ///
    /// ```
    /// use lexscan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(">=1");
    /// assert_eq!(cursor.lookahead(2), Some(">="));
    /// assert_eq!(Cursor::new(">").lookahead(2), None);
    /// ```
    pub fn lookahead(&self, count: usize) -> Option<&'a str> {
        let rest = self.remaining();
        let mut end = 0;
        let mut chars = rest.char_indices();
        for _ in 0..count {
            let (offset, c) = chars.next()?;
            end = offset + c.len_utf8();
        }
        Some(&rest[..end])
    }

    /// Consumes and returns the current character.
    ///
    /// Does nothing and returns `None` if already at the end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        self.index += 1;
        Some(c)
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of characters consumed so far.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the source between byte offset `start` and the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use lexscan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("== x");
    /// let start = cursor.position();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(start), "==");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("é@");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.current(), Some('@'));
    }

    #[test]
    fn test_lookahead_multibyte() {
        let cursor = Cursor::new("→=");
        assert_eq!(cursor.lookahead(1), Some("→"));
        assert_eq!(cursor.lookahead(2), Some("→="));
        assert_eq!(cursor.lookahead(3), None);
    }

    #[test]
    fn test_lookahead_zero() {
        let cursor = Cursor::new("x");
        assert_eq!(cursor.lookahead(0), Some(""));
    }

    #[test]
    fn test_nul_is_a_character() {
        let mut cursor = Cursor::new("\0a");
        assert_eq!(cursor.current(), Some('\0'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('a'));
    }

    #[test]
    fn test_remaining() {
        let mut cursor = Cursor::new("var x");
        for _ in 0..4 {
            cursor.advance();
        }
        assert_eq!(cursor.remaining(), "x");
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), "");
    }
}
