//! Span module - Source location tracking.
//!
//! Positions are stored zero-based, the way a scanner counts them, and are
//! converted to one-based numbers only when shown to a human.

use std::fmt;

/// A zero-based line/column location in source text.
///
/// Columns count characters, not bytes.
///
/// # Examples
///
/// ```
/// use cartc_util::span::Position;
///
/// let pos = Position::new(0, 4);
/// assert_eq!(pos.display_line(), 1);
/// assert_eq!(pos.display_column(), 5);
/// assert_eq!(pos.to_string(), "1:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line index (0-based)
    pub line: u32,
    /// Column index in characters (0-based)
    pub column: u32,
}

impl Position {
    /// The first character of the first line.
    pub const START: Position = Position { line: 0, column: 0 };

    /// Create a new position from zero-based coordinates.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// One-based line number, for messages.
    #[inline]
    pub const fn display_line(&self) -> u32 {
        self.line + 1
    }

    /// One-based column number, for messages.
    #[inline]
    pub const fn display_column(&self) -> u32 {
        self.column + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.display_line(), self.display_column())
    }
}
