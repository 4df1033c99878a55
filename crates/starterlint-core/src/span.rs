//! Source span and position types for locating code regions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A line and column position within a source unit.
///
/// Both fields are zero-indexed to match Tree-sitter conventions. Use
/// [`LineCol::one_based`] for user-facing coordinates.
///
/// # Example
///
/// ```
/// use starterlint_core::LineCol;
///
/// let pos = LineCol::new(4, 0);
/// assert_eq!(pos.line(), 4);
/// assert_eq!(pos.one_based(), (5, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCol {
    /// Zero-indexed line number.
    pub line: u32,
    /// Zero-indexed column number (byte offset within the line).
    pub column: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the zero-indexed line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the zero-indexed column number.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns `(line, column)` counted from one, for display.
    #[must_use]
    pub const fn one_based(&self) -> (u32, u32) {
        (self.line.saturating_add(1), self.column.saturating_add(1))
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.one_based();
        write!(f, "{line}:{column}")
    }
}

/// A byte and line/column span in a UTF-8 source.
///
/// The byte range is half-open: `start_byte` is inclusive and `end_byte` is
/// exclusive. The `start` and `end` positions provide line/column
/// equivalents.
///
/// # Example
///
/// ```
/// use starterlint_core::{LineCol, Span};
///
/// let span = Span::new(10, 42, LineCol::new(2, 0), LineCol::new(4, 0));
/// assert_eq!(span.len(), 32);
/// assert!(span.contains(&Span::new(12, 20, LineCol::new(2, 2), LineCol::new(2, 10))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start_byte: u32,
    /// End byte offset (exclusive).
    pub end_byte: u32,
    /// Start position as line and column.
    pub start: LineCol,
    /// End position as line and column.
    pub end: LineCol,
}

impl Span {
    /// Creates a new span from byte offsets and line/column positions.
    #[must_use]
    pub const fn new(start_byte: u32, end_byte: u32, start: LineCol, end: LineCol) -> Self {
        Self {
            start_byte,
            end_byte,
            start,
            end,
        }
    }

    /// Returns the inclusive start byte offset.
    #[must_use]
    pub const fn start_byte(&self) -> u32 {
        self.start_byte
    }

    /// Returns the exclusive end byte offset.
    #[must_use]
    pub const fn end_byte(&self) -> u32 {
        self.end_byte
    }

    /// Returns the start line/column position.
    #[must_use]
    pub const fn start(&self) -> &LineCol {
        &self.start
    }

    /// Returns the end line/column position.
    #[must_use]
    pub const fn end(&self) -> &LineCol {
        &self.end
    }

    /// Returns the number of bytes covered by the span.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end_byte.saturating_sub(self.start_byte)
    }

    /// Returns `true` when the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `other` lies entirely within this span.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start_byte <= other.start_byte && other.end_byte <= self.end_byte
    }
}
