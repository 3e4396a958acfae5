//! Source location tracking.
//!
//! Locations are character indices into the scanned text, not byte
//! offsets. There is no line/column information: a diagnostic points at
//! the half-open range `start..end` of characters it concerns.
//!
//! # Examples
//!
//! ```
//! use lexscan_util::span::Span;
//!
//! let span = Span::new(3, 7);
//! assert_eq!(span.len(), 4);
//! assert_eq!(span.to_string(), "3..7");
//! ```

use std::fmt;

/// A half-open range of character indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First character index covered by the span.
    pub start: usize,
    /// One past the last character index covered by the span.
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    ///
    /// `end` is clamped so that it is never smaller than `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexscan_util::span::Span;
    ///
    /// assert_eq!(Span::new(5, 2), Span::new(5, 5));
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// Create an empty span at a single position.
    #[inline]
    pub const fn point(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Number of characters covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no characters.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `index` falls inside the span.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new_clamps_end() {
        let span = Span::new(10, 4);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 10);
        assert!(span.is_empty());
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(7);
        assert_eq!(span.len(), 0);
        assert!(!span.contains(7));
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(2, 5);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_span_to() {
        let merged = Span::new(4, 6).to(Span::new(1, 3));
        assert_eq!(merged, Span::new(1, 6));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 12).to_string(), "0..12");
        assert_eq!(Span::DUMMY.to_string(), "0..0");
    }
}
