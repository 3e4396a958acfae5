//! lexscan-util - Shared infrastructure for the lexscan workspace
//!
//! This crate provides the types the scanner uses to report problems
//! without interrupting the token stream:
//!
//! - [`span`] - Character-index ranges into the scanned source
//! - [`diagnostic`] - Warning level, codes, diagnostics and the
//!   [`Handler`] that collects them
//!
//! # Example
//!
//! ```
//! use lexscan_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unterminated string literal")
//!     .code(DiagnosticCode::W_UNTERMINATED_STRING)
//!     .span(Span::new(4, 8))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert_eq!(
//!     handler.take_diagnostics()[0].code,
//!     Some(DiagnosticCode::W_UNTERMINATED_STRING)
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
