//! Lexical error types.
//!
//! Every failure the lexer can report is a [`LexerError`]: a one-based line
//! and column plus a [`LexerErrorKind`] saying what went wrong. Errors are
//! terminal; the lexer does not resynchronize after one.

use cartc_util::{Diagnostic, Position, SourceSnippet};
use thiserror::Error;

/// What went wrong at the reported location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerErrorKind {
    /// No token rule matches the character.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// A backslash in a quoted string is followed by something that is not an escape.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// Input ended inside a quoted string.
    #[error("unterminated string")]
    UnterminatedString,

    /// Input ended inside a long-bracket string.
    #[error("unterminated long string (expected '{}')", closer(.level))]
    UnterminatedLongString {
        /// Number of `=` signs the closer needs.
        level: usize,
    },

    /// Input ended inside a long-bracket comment.
    #[error("unterminated long comment (expected '{}')", closer(.level))]
    UnterminatedLongComment {
        /// Number of `=` signs the closer needs.
        level: usize,
    },
}

impl LexerErrorKind {
    /// Number of characters the error covers, starting at its column. For an
    /// unterminated long bracket this is the whole opening delimiter.
    pub fn width(&self) -> usize {
        match *self {
            LexerErrorKind::UnterminatedLongString { level } => level + 2,
            LexerErrorKind::UnterminatedLongComment { level } => level + 4,
            _ => 1,
        }
    }
}

fn closer(level: &usize) -> String {
    format!("]{}]", "=".repeat(*level))
}

/// A lexical error at a one-based line and column.
///
/// ```
/// use cartc_lex::{Lexer, Version};
///
/// let mut lexer = Lexer::new(Version::CURRENT);
/// let err = lexer.process_line("123 @ 456").unwrap_err();
/// assert_eq!((err.line, err.column), (1, 5));
/// assert_eq!(err.to_string(), "line 1, column 5: unexpected character '@'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {kind}")]
pub struct LexerError {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// What went wrong
    pub kind: LexerErrorKind,
}

impl LexerError {
    /// Creates an error at a zero-based scanner position.
    pub fn at(position: Position, kind: LexerErrorKind) -> Self {
        Self {
            line: position.display_line(),
            column: position.display_column(),
            kind,
        }
    }

    /// The zero-based position of the error.
    pub fn position(&self) -> Position {
        Position::new(self.line.saturating_sub(1), self.column.saturating_sub(1))
    }

    /// Returns true if the error reports input ending inside an open construct.
    pub fn is_unterminated(&self) -> bool {
        matches!(
            self.kind,
            LexerErrorKind::UnterminatedString
                | LexerErrorKind::UnterminatedLongString { .. }
                | LexerErrorKind::UnterminatedLongComment { .. }
        )
    }

    /// Converts the error into a diagnostic without source context.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.to_string(), self.position());
        if self.is_unterminated() {
            diag.with_note("the construct was opened here and never closed")
        } else {
            diag
        }
    }

    /// Renders the error with carets under the offending text of
    /// `source_line`, the text of line [`LexerError::line`]. An unterminated
    /// construct has its whole opener underlined and labelled.
    ///
    /// ```
    /// use cartc_lex::{Lexer, Version};
    ///
    /// let mut lexer = Lexer::new(Version::CURRENT);
    /// let err = lexer.process_line("123 @ 456").unwrap_err();
    /// let rendered = err.render("123 @ 456");
    /// assert!(rendered.ends_with("  1 | 123 @ 456\n    |     ^"));
    /// ```
    pub fn render(&self, source_line: &str) -> String {
        let start = self.column as usize;
        let end = start + self.kind.width() - 1;
        let mut snippet = SourceSnippet::range(source_line, self.line as usize, start, end);
        if self.is_unterminated() {
            snippet = snippet.with_label("opened here");
        }
        Diagnostic::error(self.kind.to_string(), self.position())
            .with_snippet(snippet)
            .to_string()
    }
}

/// Result type alias for lexer operations.
pub type Result<T> = std::result::Result<T, LexerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_converts_to_one_based() {
        let err = LexerError::at(Position::new(0, 4), LexerErrorKind::UnexpectedCharacter('@'));
        assert_eq!((err.line, err.column), (1, 5));
        assert_eq!(err.position(), Position::new(0, 4));
    }

    #[test]
    fn test_kind_messages() {
        assert_eq!(
            LexerErrorKind::InvalidEscape('q').to_string(),
            "invalid escape sequence '\\q'"
        );
        assert_eq!(
            LexerErrorKind::UnterminatedLongString { level: 2 }.to_string(),
            "unterminated long string (expected ']==]')"
        );
        assert_eq!(
            LexerErrorKind::UnterminatedLongComment { level: 0 }.to_string(),
            "unterminated long comment (expected ']]')"
        );
    }

    #[test]
    fn test_unterminated_classification() {
        let open = LexerError::at(Position::START, LexerErrorKind::UnterminatedString);
        let bad = LexerError::at(Position::START, LexerErrorKind::UnexpectedCharacter('$'));
        assert!(open.is_unterminated());
        assert!(!bad.is_unterminated());
        assert_eq!(open.to_diagnostic().notes.len(), 1);
        assert!(bad.to_diagnostic().notes.is_empty());
    }

    #[test]
    fn test_render_underlines_unterminated_opener() {
        let err = LexerError::at(
            Position::new(0, 4),
            LexerErrorKind::UnterminatedLongComment { level: 1 },
        );
        assert_eq!(
            err.render("x = --[=[ open"),
            "error: unterminated long comment (expected ']=]')\n --> 1:5\n  1 | x = --[=[ open\n    |     ^^^^^ opened here"
        );
    }

    #[test]
    fn test_error_widths() {
        assert_eq!(LexerErrorKind::UnexpectedCharacter('@').width(), 1);
        assert_eq!(LexerErrorKind::UnterminatedString.width(), 1);
        assert_eq!(LexerErrorKind::UnterminatedLongString { level: 2 }.width(), 4);
    }

    #[test]
    fn test_render_points_at_column() {
        let err = LexerError::at(Position::new(2, 2), LexerErrorKind::UnexpectedCharacter('$'));
        assert_eq!(
            err.render("a $ b\n"),
            "error: unexpected character '$'\n --> 3:3\n  3 | a $ b\n    |   ^"
        );
    }
}
