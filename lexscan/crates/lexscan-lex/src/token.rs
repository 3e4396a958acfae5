//! Token and trace types produced by the scanner.

use std::fmt;

/// Classification of a completed lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A word from the keyword table, e.g. `var`
    Keyword,
    /// Any other word of ASCII letters, digits and `_`
    Identifier,
    /// Digits and dots, e.g. `3.14` (also the malformed `1.2.3`)
    Number,
    /// Quoted text including both quote characters
    String,
    /// A one- or two-character entry of the operator table
    Operator,
    /// A single character from the separator table
    Separator,
    /// A `//` line comment or a `/* */` block comment, delimiters included
    Comment,
    /// Any character no other rule accepts
    Unknown,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Comment,
        TokenKind::Unknown,
    ];

    /// Display name of the kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
            TokenKind::Comment => "Comment",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme.
///
/// `value` is the exact text matched in the source.
///
/// # Example
///
/// ```
/// use lexscan_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::String, "\"hi\"");
/// assert_eq!(token.kind(), TokenKind::String);
/// assert_eq!(token.value(), "\"hi\"");
/// assert_eq!(token.to_string(), "String(\"hi\")");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: TokenKind,
    value: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The token's classification.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched source text.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of source characters the token covers.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

/// State of the scanning automaton.
///
/// `Operator`, `Separator` and `Unknown` tokens are emitted from `Start`
/// in a single step, so the automaton never rests in those states. They
/// exist so that every token kind has a matching state name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanState {
    /// Between lexemes
    #[default]
    Start,
    /// Inside a word
    Identifier,
    /// Inside a number
    Number,
    /// Inside a quoted string
    String,
    /// Transient: an operator is being emitted
    Operator,
    /// Transient: a separator is being emitted
    Separator,
    /// Inside a comment
    Comment,
    /// Transient: an unknown character is being emitted
    Unknown,
}

impl ScanState {
    /// Display name of the state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScanState::Start => "Start",
            ScanState::Identifier => "Identifier",
            ScanState::Number => "Number",
            ScanState::String => "String",
            ScanState::Operator => "Operator",
            ScanState::Separator => "Separator",
            ScanState::Comment => "Comment",
            ScanState::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One consumed character and the state the scanner was in when it read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateTraceEntry {
    /// The consumed character
    pub character: char,
    /// The state that consumed it
    pub state: ScanState,
}

impl StateTraceEntry {
    /// Creates a trace entry.
    pub const fn new(character: char, state: ScanState) -> Self {
        Self { character, state }
    }
}
