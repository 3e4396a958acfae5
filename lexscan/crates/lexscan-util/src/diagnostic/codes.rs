//! Diagnostic codes for categorizing scanner warnings.
//!
//! # Examples
//!
//! ```
//! use lexscan_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::W_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "W");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.as_str(), "W0001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`, the number padded to four
/// digits: "E" for errors, "W" for warnings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
    /// Short machine-readable name
    pub name: &'static str,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32, name: &'static str) -> Self {
        Self {
            prefix,
            number,
            name,
        }
    }

    /// The code prefix.
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The numeric part of the code.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The short name, e.g. `unterminated_string`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Formats the code as `W0001`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// A string literal ran to end of input without its closing quote.
    pub const W_UNTERMINATED_STRING: Self = Self::new("W", 1, "unterminated_string");

    /// A block comment ran to end of input without `*/`.
    pub const W_UNTERMINATED_BLOCK_COMMENT: Self =
        Self::new("W", 2, "unterminated_block_comment");
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({}, {})", self.as_str(), self.name)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_padding() {
        let code = DiagnosticCode::new("E", 42, "example");
        assert_eq!(code.as_str(), "E0042");
        assert_eq!(code.to_string(), "E0042");
    }

    #[test]
    fn test_predefined_codes_are_distinct() {
        assert_ne!(
            DiagnosticCode::W_UNTERMINATED_STRING,
            DiagnosticCode::W_UNTERMINATED_BLOCK_COMMENT
        );
        assert_eq!(DiagnosticCode::W_UNTERMINATED_BLOCK_COMMENT.as_str(), "W0002");
    }

    #[test]
    fn test_debug_includes_name() {
        let debug = format!("{:?}", DiagnosticCode::W_UNTERMINATED_STRING);
        assert_eq!(debug, "DiagnosticCode(W0001, unterminated_string)");
    }
}
