//! Core scanner implementation.
//!
//! This module contains the Scanner struct, its main loop and the
//! bookkeeping shared by every state: trace recording, token emission and
//! the end-of-input flush.

use std::mem;

use lexscan_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::rules::RuleTables;
use crate::token::{ScanState, StateTraceEntry, Token, TokenKind};

/// Output of one scan: the token stream and the per-character trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanResult {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// One entry per input character.
    pub trace: Vec<StateTraceEntry>,
}

impl ScanResult {
    /// Splits the result into `(tokens, trace)`.
    pub fn into_parts(self) -> (Vec<Token>, Vec<StateTraceEntry>) {
        (self.tokens, self.trace)
    }
}

/// Scans `source` with the standard rule tables.
///
/// Diagnostics about dropped lexemes are discarded; use [`scan_with`] to
/// collect them.
///
/// # Example
///
/// ```
/// use lexscan_lex::{scan, Token, TokenKind};
///
/// let result = scan("x == 1;");
/// assert_eq!(result.tokens[1], Token::new(TokenKind::Operator, "=="));
/// assert_eq!(result.trace.len(), 7);
/// ```
pub fn scan(source: &str) -> ScanResult {
    let handler = Handler::new();
    scan_with(source, RuleTables::standard(), &handler)
}

/// Scans `source` with the given rule tables, reporting dropped lexemes
/// to `handler`.
pub fn scan_with(source: &str, rules: &RuleTables, handler: &Handler) -> ScanResult {
    Scanner::new(source, rules, handler).run()
}

/// Scanner for one input string.
///
/// The scanner walks the source once, left to right, as a deterministic
/// automaton over [`ScanState`]. It is consumed by [`Scanner::run`].
///
/// # Example
///
/// ```
/// use lexscan_lex::{RuleTables, Scanner, TokenKind};
/// use lexscan_util::Handler;
///
/// let handler = Handler::new();
/// let result = Scanner::new("print \"hi", RuleTables::standard(), &handler).run();
///
/// assert_eq!(result.tokens.len(), 1);
/// assert_eq!(result.tokens[0].kind(), TokenKind::Keyword);
/// assert_eq!(handler.warning_count(), 1);
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Keyword, operator and separator tables.
    pub(super) rules: &'a RuleTables,

    /// Receives warnings about dropped lexemes.
    handler: &'a Handler,

    /// Current automaton state.
    pub(super) state: ScanState,

    /// Text of the lexeme in progress.
    pub(super) buffer: String,

    /// Character index where the lexeme in progress began.
    lexeme_start: usize,

    /// Quote character that opened the string in progress.
    pub(super) quote: Option<char>,

    tokens: Vec<Token>,
    trace: Vec<StateTraceEntry>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str, rules: &'a RuleTables, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            rules,
            handler,
            state: ScanState::Start,
            buffer: String::new(),
            lexeme_start: 0,
            quote: None,
            tokens: Vec::new(),
            trace: Vec::with_capacity(source.len()),
        }
    }

    /// Runs the automaton to the end of input.
    pub fn run(mut self) -> ScanResult {
        while !self.cursor.is_at_end() {
            self.step();
        }
        self.flush();

        debug!(
            tokens = self.tokens.len(),
            chars = self.trace.len(),
            "scan complete"
        );
        ScanResult {
            tokens: self.tokens,
            trace: self.trace,
        }
    }

    /// Performs one transition of the automaton.
    fn step(&mut self) {
        match self.state {
            ScanState::Start => self.step_start(),
            ScanState::Identifier => self.step_identifier(),
            ScanState::Number => self.step_number(),
            ScanState::String => self.step_string(),
            ScanState::Comment => self.step_comment(),
            // Emitted from Start in a single step; never entered.
            ScanState::Operator | ScanState::Separator | ScanState::Unknown => {
                self.state = ScanState::Start;
            },
        }
    }

    /// Consumes the current character, recording it in the trace with the
    /// state that read it.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.cursor.advance()?;
        self.trace.push(StateTraceEntry::new(c, self.state));
        Some(c)
    }

    /// Consumes the current character into the buffer.
    pub(super) fn consume_into_buffer(&mut self) -> Option<char> {
        let c = self.consume()?;
        self.buffer.push(c);
        Some(c)
    }

    /// Consumes the current character as the first of a multi-character
    /// lexeme and moves to `state`.
    pub(super) fn begin(&mut self, state: ScanState) {
        self.lexeme_start = self.cursor.index();
        self.buffer.clear();
        self.consume_into_buffer();
        self.state = state;
    }

    /// Emits the buffer as a token of `kind` and returns to `Start`.
    pub(super) fn finish(&mut self, kind: TokenKind) {
        let value = mem::take(&mut self.buffer);
        self.push_token(Token::new(kind, value));
        self.quote = None;
        self.state = ScanState::Start;
    }

    /// Consumes `count` characters from `Start` and emits them as one
    /// token. The automaton stays in `Start`.
    pub(super) fn emit_from_start(&mut self, kind: TokenKind, count: usize) {
        let start = self.cursor.position();
        for _ in 0..count {
            self.consume();
        }
        let value = self.cursor.slice_from(start);
        self.push_token(Token::new(kind, value));
    }

    fn push_token(&mut self, token: Token) {
        trace!(kind = %token.kind(), value = token.value(), "token");
        self.tokens.push(token);
    }

    /// Handles a lexeme left open at end of input.
    fn flush(&mut self) {
        match self.state {
            ScanState::Identifier => self.finish_word(),
            ScanState::Number => self.finish(TokenKind::Number),
            ScanState::String if !self.buffer.is_empty() => self.drop_pending(
                DiagnosticCode::W_UNTERMINATED_STRING,
                "unterminated string literal",
                "add the closing quote",
            ),
            ScanState::Comment if !self.buffer.is_empty() => self.drop_pending(
                DiagnosticCode::W_UNTERMINATED_BLOCK_COMMENT,
                "unterminated block comment",
                "close the comment with `*/`",
            ),
            _ => {},
        }
    }

    /// Discards the pending lexeme and reports it.
    ///
    /// The token stream is unaffected: the dropped text simply produces no
    /// token.
    fn drop_pending(&mut self, code: DiagnosticCode, message: &str, help: &str) {
        let span = Span::new(self.lexeme_start, self.cursor.index());
        debug!(%span, code = %code, "dropping {}", message);
        DiagnosticBuilder::warning(message)
            .code(code)
            .span(span)
            .note("no token was produced for this text")
            .help(help)
            .emit(self.handler);

        self.buffer.clear();
        self.quote = None;
        self.state = ScanState::Start;
    }
}
