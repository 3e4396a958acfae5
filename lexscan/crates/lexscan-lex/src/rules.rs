//! Keyword, operator and separator tables.
//!
//! The tables are read-only once built. [`RuleTables::standard`] returns
//! the built-in language rules, constructed once per process; custom
//! tables go through [`RuleTables::new`], which rejects entries the
//! scanner could never match.
//!
//! # Example
//!
//! ```
//! use lexscan_lex::RuleTables;
//!
//! let rules = RuleTables::standard();
//! assert!(rules.is_keyword("while"));
//! assert!(rules.is_operator(">="));
//! assert!(rules.is_separator('{'));
//! assert!(!rules.is_operator("&&"));
//! ```

use std::hash::BuildHasherDefault;
use std::sync::OnceLock;

use indexmap::IndexSet;
use rustc_hash::FxHasher;
use thiserror::Error;

use crate::classify::{is_ident_continue, is_ident_start, starts_other_lexeme};

type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// Built-in keywords.
pub const KEYWORDS: &[&str] = &["var", "print", "if", "else", "while", "function", "return"];

/// Built-in operators, one and two characters long.
pub const OPERATORS: &[&str] = &["+", "-", "*", "/", "=", "==", "!=", ">", "<", ">=", "<="];

/// Built-in separators.
pub const SEPARATORS: &[char] = &[';', '(', ')', '{', '}'];

/// Longest operator the scanner will try to match.
pub const MAX_OPERATOR_LEN: usize = 2;

static STANDARD: OnceLock<RuleTables> = OnceLock::new();

/// Error building custom rule tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// An operator entry was the empty string.
    #[error("operator must not be empty")]
    EmptyOperator,

    /// An operator entry had more than [`MAX_OPERATOR_LEN`] characters.
    #[error("operator `{0}` is longer than two characters")]
    OperatorTooLong(String),

    /// An operator began with a character consumed by an earlier rule.
    #[error("operator `{0}` can never match: it starts like another lexeme")]
    UnreachableOperator(String),

    /// A separator entry was not exactly one character.
    #[error("separator `{0}` must be exactly one character")]
    InvalidSeparator(String),

    /// A separator was a character consumed by an earlier rule.
    #[error("separator `{0}` can never match: it starts like another lexeme")]
    UnreachableSeparator(char),

    /// A keyword was not a well-formed identifier.
    #[error("keyword `{0}` is not a valid identifier")]
    InvalidKeyword(String),

    /// A character was listed both as an operator and as a separator.
    #[error("`{0}` is listed as both an operator and a separator")]
    Ambiguous(char),
}

/// Result type alias for rule table construction.
pub type RuleResult<T> = std::result::Result<T, RuleError>;

/// The scanner's configuration: what counts as a keyword, an operator and
/// a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTables {
    keywords: FxIndexSet<String>,
    operators: FxIndexSet<String>,
    separators: FxIndexSet<char>,
}

static_assertions::assert_impl_all!(RuleTables: Send, Sync);

impl RuleTables {
    /// The built-in tables, shared by every scan in the process.
    pub fn standard() -> &'static RuleTables {
        STANDARD.get_or_init(|| RuleTables {
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            operators: OPERATORS.iter().map(|o| o.to_string()).collect(),
            separators: SEPARATORS.iter().copied().collect(),
        })
    }

    /// Builds validated custom tables.
    ///
    /// Duplicate entries are ignored; the first occurrence fixes the
    /// iteration order.
    ///
    /// # Example
    ///
    /// ```
    /// use lexscan_lex::{RuleError, RuleTables};
    ///
    /// let rules = RuleTables::new(["let"], ["=", "=>"], [";"]).unwrap();
    /// assert!(rules.is_keyword("let"));
    ///
    /// let err = RuleTables::new(["let"], ["==="], [";"]).unwrap_err();
    /// assert_eq!(err, RuleError::OperatorTooLong("===".to_string()));
    /// ```
    pub fn new<K, O, S>(keywords: K, operators: O, separators: S) -> RuleResult<Self>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| validate_keyword(k.as_ref()))
            .collect::<RuleResult<FxIndexSet<String>>>()?;
        let operators = operators
            .into_iter()
            .map(|o| validate_operator(o.as_ref()))
            .collect::<RuleResult<FxIndexSet<String>>>()?;
        let separators = separators
            .into_iter()
            .map(|s| validate_separator(s.as_ref()))
            .collect::<RuleResult<FxIndexSet<char>>>()?;

        for &sep in &separators {
            let mut buf = [0u8; 4];
            if operators.contains(sep.encode_utf8(&mut buf) as &str) {
                return Err(RuleError::Ambiguous(sep));
            }
        }

        Ok(Self {
            keywords,
            operators,
            separators,
        })
    }

    /// Returns true if `word` is exactly a keyword.
    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Returns true if `candidate` is exactly an operator.
    #[inline]
    pub fn is_operator(&self, candidate: &str) -> bool {
        self.operators.contains(candidate)
    }

    /// Returns true if `c` is a separator.
    #[inline]
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Keywords in definition order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Operators in definition order.
    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(String::as_str)
    }

    /// Separators in definition order.
    pub fn separators(&self) -> impl Iterator<Item = char> + '_ {
        self.separators.iter().copied()
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::standard().clone()
    }
}

fn validate_keyword(keyword: &str) -> RuleResult<String> {
    let mut chars = keyword.chars();
    let valid = chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue);
    if valid {
        Ok(keyword.to_string())
    } else {
        Err(RuleError::InvalidKeyword(keyword.to_string()))
    }
}

fn validate_operator(operator: &str) -> RuleResult<String> {
    let Some(first) = operator.chars().next() else {
        return Err(RuleError::EmptyOperator);
    };
    if operator.chars().count() > MAX_OPERATOR_LEN {
        return Err(RuleError::OperatorTooLong(operator.to_string()));
    }
    // `//` and `/*` are claimed by comments before operators are tried.
    if starts_other_lexeme(first) || operator == "//" || operator == "/*" {
        return Err(RuleError::UnreachableOperator(operator.to_string()));
    }
    Ok(operator.to_string())
}

fn validate_separator(separator: &str) -> RuleResult<char> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if starts_other_lexeme(c) => Err(RuleError::UnreachableSeparator(c)),
        (Some(c), None) => Ok(c),
        _ => Err(RuleError::InvalidSeparator(separator.to_string())),
    }
}
