//! `Start` state dispatch.
//!
//! Classifies the character under the cursor and either enters a
//! multi-character state or emits a complete operator, separator or
//! unknown token.

use super::Scanner;
use crate::classify::{is_digit, is_ident_start, is_quote, is_whitespace};
use crate::rules::MAX_OPERATOR_LEN;
use crate::token::{ScanState, TokenKind};

impl<'a> Scanner<'a> {
    /// Handles one character in the `Start` state.
    ///
    /// Rules are tried in order: whitespace, identifier, number, string,
    /// comment, operator (longest first), separator, unknown.
    pub(super) fn step_start(&mut self) {
        let Some(c) = self.cursor.current() else {
            return;
        };

        if is_whitespace(c) {
            self.consume();
        } else if is_ident_start(c) {
            self.begin(ScanState::Identifier);
        } else if is_digit(c) {
            self.begin(ScanState::Number);
        } else if is_quote(c) {
            self.quote = Some(c);
            self.begin(ScanState::String);
        } else if c == '/' && matches!(self.cursor.peek(), Some('/' | '*')) {
            // Only the first `/` is consumed here; the Comment state reads
            // the second delimiter character.
            self.begin(ScanState::Comment);
        } else if let Some(len) = self.match_operator() {
            self.emit_from_start(TokenKind::Operator, len);
        } else if self.rules.is_separator(c) {
            self.emit_from_start(TokenKind::Separator, 1);
        } else {
            self.emit_from_start(TokenKind::Unknown, 1);
        }
    }

    /// Returns the character length of the longest operator starting at
    /// the cursor.
    fn match_operator(&self) -> Option<usize> {
        (1..=MAX_OPERATOR_LEN).rev().find(|&len| {
            self.cursor
                .lookahead(len)
                .is_some_and(|candidate| self.rules.is_operator(candidate))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::RuleTables;
    use crate::{scan, scan_with, Token, TokenKind};
    use lexscan_util::Handler;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_longest_match() {
        for op in ["==", "!=", ">=", "<="] {
            let tokens = scan(op).tokens;
            assert_eq!(tokens, vec![Token::new(TokenKind::Operator, op)]);
        }
    }

    #[test]
    fn test_single_char_operators() {
        let tokens = scan("+-*/=><").tokens;
        let values: Vec<_> = tokens.iter().map(Token::value).collect();
        assert_eq!(values, ["+", "-", "*", "/", "=", ">", "<"]);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Operator));
    }

    #[test]
    fn test_triple_equals_splits() {
        let values: Vec<_> = scan("===").tokens.iter().map(|t| t.value().to_string()).collect();
        assert_eq!(values, ["==", "="]);
    }

    #[test]
    fn test_bang_alone_is_unknown() {
        assert_eq!(scan("!").tokens, vec![Token::new(TokenKind::Unknown, "!")]);
    }

    #[test]
    fn test_separators() {
        assert_eq!(kinds("(){};"), vec![TokenKind::Separator; 5]);
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(scan("@").tokens, vec![Token::new(TokenKind::Unknown, "@")]);
        assert_eq!(scan("é").tokens, vec![Token::new(TokenKind::Unknown, "é")]);
        assert_eq!(kinds("#,["), vec![TokenKind::Unknown; 3]);
    }

    #[test]
    fn test_whitespace_skipped() {
        let result = scan(" \t\r\n ");
        assert!(result.tokens.is_empty());
        assert_eq!(result.trace.len(), 5);
    }

    #[test]
    fn test_slash_before_space_is_operator() {
        assert_eq!(
            kinds("a / b"),
            vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_custom_two_char_operator_without_prefix() {
        let rules = RuleTables::new(["let"], ["=>"], [","]).unwrap();
        let handler = Handler::new();
        let tokens = scan_with("=>=", &rules, &handler).tokens;
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Operator, "=>"),
                Token::new(TokenKind::Unknown, "="),
            ]
        );
    }

    #[test]
    fn test_custom_multibyte_operator() {
        let rules = RuleTables::new(Vec::<&str>::new(), ["→", "→→"], Vec::<&str>::new()).unwrap();
        let handler = Handler::new();
        let result = scan_with("→→→", &rules, &handler);
        let values: Vec<_> = result.tokens.iter().map(Token::value).collect();
        assert_eq!(values, ["→→", "→"]);
        assert_eq!(result.trace.len(), 3);
    }
}
