//! Edge case and property tests for lexscan-lex

use crate::classify::is_whitespace;
use crate::{scan, Token, TokenKind};
use proptest::prelude::*;

/// Replays the tokens over `source`, skipping whitespace between them,
/// and returns whatever text the tokens did not account for.
fn unaccounted_tail<'s>(source: &'s str, tokens: &[Token]) -> &'s str {
    let mut rest = source;
    for token in tokens {
        rest = rest.trim_start_matches(is_whitespace);
        assert!(
            rest.starts_with(token.value()),
            "token {} does not continue the input at {:?}",
            token,
            rest
        );
        rest = &rest[token.value().len()..];
    }
    rest.trim_start_matches(is_whitespace)
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    let result = scan("");
    assert!(result.tokens.is_empty());
    assert!(result.trace.is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(scan("x").tokens, vec![Token::new(TokenKind::Identifier, "x")]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let tokens = scan(&format!("var {} = 1;", name)).tokens;
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, name.as_str()));
}

#[test]
fn test_edge_no_whitespace_between_tokens() {
    let tokens = scan("if(x>=1){print'y';}").tokens;
    let values: Vec<_> = tokens.iter().map(Token::value).collect();
    assert_eq!(
        values,
        ["if", "(", "x", ">=", "1", ")", "{", "print", "'y'", ";", "}"]
    );
}

#[test]
fn test_edge_string_directly_after_number() {
    let tokens = scan("1\"a\"").tokens;
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Number, "1"),
            Token::new(TokenKind::String, "\"a\""),
        ]
    );
}

#[test]
fn test_edge_comment_directly_after_identifier() {
    let tokens = scan("x//y").tokens;
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "x"),
            Token::new(TokenKind::Comment, "//y"),
        ]
    );
}

#[test]
fn test_edge_unicode_whitespace_skipped() {
    let result = scan("a\u{00A0}\u{2003}b");
    assert_eq!(result.tokens.len(), 2);
    assert_eq!(result.trace.len(), 4);
}

#[test]
fn test_edge_leading_byte_order_mark_skipped() {
    let result = scan("\u{FEFF}var x");
    assert_eq!(
        result.tokens,
        vec![
            Token::new(TokenKind::Keyword, "var"),
            Token::new(TokenKind::Identifier, "x"),
        ]
    );
    assert_eq!(result.trace.len(), 6);
}

#[test]
fn test_edge_next_line_is_unknown() {
    assert_eq!(
        scan("a\u{0085}b").tokens,
        vec![
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Unknown, "\u{0085}"),
            Token::new(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn test_edge_control_characters_unknown() {
    let tokens = scan("\0\u{7}").tokens;
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Unknown, "\0"),
            Token::new(TokenKind::Unknown, "\u{7}"),
        ]
    );
}

#[test]
fn test_edge_emoji_unknown() {
    let result = scan("😀");
    assert_eq!(result.tokens, vec![Token::new(TokenKind::Unknown, "😀")]);
    assert_eq!(result.trace.len(), 1);
}

#[test]
fn test_edge_tail_of_dropped_string() {
    let source = "var s = 'never";
    let tokens = scan(source).tokens;
    assert_eq!(unaccounted_tail(source, &tokens), "'never");
}

#[test]
fn test_stress_unterminated_string_is_linear() {
    let source = format!("\"{}", "x".repeat(200_000));
    let result = scan(&source);
    assert!(result.tokens.is_empty());
    assert_eq!(result.trace.len(), 200_001);
}

// ==================== PROPERTIES ====================

proptest! {
    #[test]
    fn prop_trace_length_equals_char_count(source in any::<String>()) {
        let result = scan(&source);
        prop_assert_eq!(result.trace.len(), source.chars().count());
    }

    #[test]
    fn prop_tokens_reconstruct_prefix(
        source in "[a-z0-9_ \\n\\t\"'/*=!<>+;(){}@.-]{0,64}"
    ) {
        let tokens = scan(&source).tokens;
        let tail = unaccounted_tail(&source, &tokens);
        prop_assert!(
            tail.is_empty() || tail.starts_with('"') || tail.starts_with('\'')
                || tail.starts_with("/*"),
            "unexpected tail {:?}", tail
        );
    }

    #[test]
    fn prop_identifier_strings_are_one_token(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
        let tokens = scan(&input).tokens;
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(matches!(tokens[0].kind(), TokenKind::Identifier | TokenKind::Keyword));
    }

    #[test]
    fn prop_digit_dot_strings_are_one_number(input in "[0-9][0-9.]{0,30}") {
        let tokens = scan(&input).tokens;
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::Number, input.as_str())]);
    }

    #[test]
    fn prop_quoted_text_is_one_string(body in "[^\"]{0,50}") {
        let source = format!("\"{}\"", body);
        let tokens = scan(&source).tokens;
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::String, source.as_str())]);
    }

    #[test]
    fn prop_tokens_never_empty(source in any::<String>()) {
        for token in scan(&source).tokens {
            prop_assert!(!token.value().is_empty());
        }
    }
}
