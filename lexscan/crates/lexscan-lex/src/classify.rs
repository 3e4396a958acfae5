//! Character classes used by the `Start` state.
//!
//! Identifier rules are ASCII only: a non-ASCII letter such as `é` is
//! never part of an identifier and falls through to `Unknown`.

/// Whitespace is skipped between lexemes.
///
/// Unicode White_Space minus NEL (U+0085), plus the byte-order mark
/// U+FEFF so that a leading BOM is skipped.
///
/// ```
/// use lexscan_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\u{00A0}'));
/// assert!(is_whitespace('\u{FEFF}'));
/// assert!(!is_whitespace('\u{0085}'));
/// assert!(!is_whitespace('x'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Checks if a character can start an identifier: `[a-zA-Z_]`.
///
/// ```
/// use lexscan_lex::classify::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[a-zA-Z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character starts a number: `[0-9]`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character continues a number: `[0-9.]`.
///
/// Dots are accepted anywhere after the first digit, so `1.2.3` scans as
/// one number.
#[inline]
pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Checks if a character opens a string literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Returns true if `c` is consumed by a rule that the `Start` state tries
/// before operators and separators.
///
/// A custom operator or separator beginning with such a character could
/// never match.
pub fn starts_other_lexeme(c: char) -> bool {
    is_whitespace(c) || is_ident_start(c) || is_digit(c) || is_quote(c)
}
