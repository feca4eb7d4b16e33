//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating and formatting compiler
//! diagnostics: errors with source snippets and trailing notes.
//!
//! # Examples
//!
//! ```
//! use cartc_util::diagnostic::{Diagnostic, Level};
//! use cartc_util::span::Position;
//!
//! let diag = Diagnostic::error("unterminated string", Position::new(2, 0))
//!     .with_note("the string was opened here");
//! assert_eq!(diag.level, Level::Error);
//! ```

mod snippet;

pub use snippet::SourceSnippet;

use crate::Position;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use cartc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Note), "note");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops the current phase
    Error,
    /// Additional information about a diagnostic
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location (zero-based)
    pub position: Position,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, position: Position) -> Self {
        Self {
            level,
            message: message.into(),
            position,
            notes: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Error, message, position)
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a source snippet
    ///
    /// # Examples
    ///
    /// ```
    /// use cartc_util::diagnostic::{Diagnostic, SourceSnippet};
    /// use cartc_util::span::Position;
    ///
    /// let snippet = SourceSnippet::point("x = 1 @ 2", 1, 7);
    /// let diag = Diagnostic::error("unexpected character '@'", Position::new(0, 6))
    ///     .with_snippet(snippet);
    /// assert_eq!(diag.snippets.len(), 1);
    /// ```
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.level, self.message)?;
        write!(f, " --> {}", self.position)?;
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for note in &self.notes {
            write!(f, "\n = {}: {}", Level::Note, note)?;
        }
        Ok(())
    }
}
