//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level, Span};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use lexscan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Span};
///
/// let diag = DiagnosticBuilder::warning("unterminated string literal")
///     .code(DiagnosticCode::W_UNTERMINATED_STRING)
///     .span(Span::new(0, 4))
///     .help("add the closing quote")
///     .build();
///
/// assert_eq!(diag.helps, vec!["add the closing quote"]);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building without emitting.
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
