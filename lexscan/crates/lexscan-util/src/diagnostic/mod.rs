//! Diagnostic module - Warning and error reporting infrastructure.
//!
//! The scanner never fails, but it can lose text: an unterminated string
//! or block comment at end of input produces no token. Such losses are
//! reported here as [`Diagnostic`] values collected by a [`Handler`].
//!
//! # Examples
//!
//! ```
//! use lexscan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unterminated string literal")
//!     .code(DiagnosticCode::W_UNTERMINATED_STRING)
//!     .span(Span::new(4, 8))
//!     .emit(&handler);
//!
//! let diags = handler.diagnostics();
//! assert_eq!(
//!     diags[0].to_string(),
//!     "warning[W0001]: unterminated string literal (chars 4..8)"
//! );
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

pub use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// The scanner never fails, so every diagnostic it reports is a warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Suspicious input that was still processed
    Warning,
}

impl Level {
    /// Returns the canonical lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A diagnostic message with severity and location
///
/// Built with [`DiagnosticBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Character range the diagnostic concerns
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: ", self.level, code)?,
            None => write!(f, "{}: ", self.level)?,
        }
        write!(f, "{} (chars {})", self.message, self.span)?;
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

static_assertions::assert_impl_all!(Diagnostic: Send, Sync);

/// Collects diagnostics emitted during a scan.
///
/// A handler is owned by whoever runs the scan; it is not shared between
/// threads.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create an empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Number of warnings emitted
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Returns true if nothing was emitted
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Snapshot of all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(message: &str) -> Diagnostic {
        DiagnosticBuilder::warning(message).build()
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = DiagnosticBuilder::warning("unterminated block comment")
            .code(DiagnosticCode::W_UNTERMINATED_BLOCK_COMMENT)
            .span(Span::new(3, 10))
            .build();
        assert_eq!(
            diag.to_string(),
            "warning[W0002]: unterminated block comment (chars 3..10)"
        );
    }

    #[test]
    fn test_diagnostic_display_with_note_and_help() {
        let diag = DiagnosticBuilder::warning("bad")
            .span(Span::new(0, 1))
            .note("first")
            .help("second")
            .build();
        assert_eq!(
            diag.to_string(),
            "warning: bad (chars 0..1)\n  = note: first\n  = help: second"
        );
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(handler.is_empty());
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(warning("w1"));
        handler.emit_diagnostic(warning("w2"));

        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_take() {
        let handler = Handler::new();
        handler.emit_diagnostic(warning("a"));
        let taken = handler.take_diagnostics();
        assert_eq!(taken.len(), 1);
        assert!(handler.is_empty());

        handler.emit_diagnostic(warning("b"));
        assert_eq!(handler.take_diagnostics()[0].message, "b");
    }
}
