//! Character cursor for traversing one chunk of source text.
//!
//! The lexer is fed line by line, so a cursor only ever spans the text of a
//! single ingestion call. It starts at the line index the lexer has reached
//! and keeps line/column tracking up to date as it advances, including across
//! line terminators embedded in the chunk.

use cartc_util::Position;

/// A cursor over a chunk of source text.
///
/// Lines and columns are zero-based; columns count characters.
///
/// # Example
///
/// ```
/// use cartc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a = 1", 0);
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// assert_eq!(cursor.column(), 1);
/// ```
pub struct Cursor<'a> {
    /// The chunk being traversed.
    source: &'a str,

    /// Current byte position in the chunk.
    position: usize,

    /// Current line index.
    line: u32,

    /// Current column index, in characters.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`, which begins on line `line`.
    pub fn new(source: &'a str, line: u32) -> Self {
        Self {
            source,
            position: 0,
            line,
            column: 0,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the chunk.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one,
    /// or `'\0'` past the end of the chunk.
    ///
    /// ```
    /// use cartc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("--[[", 0);
    /// assert_eq!(cursor.peek_char(2), '[');
    /// assert_eq!(cursor.peek_char(4), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character, updating line/column tracking.
    ///
    /// A `\n` ends a line. A `\r` ends a line only when it is not the first
    /// half of a `\r\n` pair. Does nothing at the end of the chunk.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };
        self.position += c.len_utf8();

        let ends_line = match c {
            '\n' => true,
            '\r' => !self.remaining().starts_with('\n'),
            _ => false,
        };
        if ends_line {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Advances over `count` bytes of text. `count` must land on a character
    /// boundary; the cursor stops early at the end of the chunk.
    pub fn advance_bytes(&mut self, count: usize) {
        let target = (self.position + count).min(self.source.len());
        while self.position < target {
            self.advance();
        }
    }

    /// Advances past every character in the chunk.
    pub fn advance_to_end(&mut self) {
        self.advance_bytes(self.source.len() - self.position);
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Matches and consumes the expected character if present.
    ///
    /// ```
    /// use cartc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("+=", 0);
    /// assert!(!cursor.match_char('='));
    /// cursor.advance();
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the chunk.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line index.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column index.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current line and column as a [`Position`].
    pub fn location(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns the current byte position in the chunk.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the chunk text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the chunk text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
