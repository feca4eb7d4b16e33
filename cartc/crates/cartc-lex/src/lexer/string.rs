//! Quoted string lexing.
//!
//! A quoted string closes on the first unescaped matching quote. Escapes are
//! decoded as they are read, so the token holds the decoded value. A string
//! still open at the end of a line stays pending and continues on the next.

use cartc_util::Position;

use crate::cursor::Cursor;
use crate::error::{LexerError, LexerErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::Lexer;

use super::core::Pending;

impl Lexer {
    /// Lexes a quoted string starting at its opening quote.
    pub(super) fn lex_short_string(&mut self, cursor: &mut Cursor<'_>) -> Result<Option<Token>> {
        let position = cursor.location();
        let quote = cursor.current_char();
        cursor.advance();

        self.lex_short_string_body(cursor, quote, String::new(), position)
    }

    /// Scans string body text up to the closing `quote`, decoding escapes
    /// into `value`.
    ///
    /// Returns `None` and parks the string as pending if the chunk ends
    /// first. A raw line break inside the string is kept as `\n`.
    pub(super) fn lex_short_string_body(
        &mut self,
        cursor: &mut Cursor<'_>,
        quote: char,
        mut value: String,
        start: Position,
    ) -> Result<Option<Token>> {
        loop {
            if cursor.is_at_end() {
                self.pending = Some(Pending::ShortString { quote, value, start });
                return Ok(None);
            }

            let c = cursor.current_char();
            if c == quote {
                cursor.advance();
                return Ok(Some(Token::new(TokenKind::String, value, start)));
            }

            cursor.advance();
            if c == '\r' {
                cursor.match_char('\n');
                value.push('\n');
                continue;
            }
            if c != '\\' {
                value.push(c);
                continue;
            }

            // A backslash ending the chunk continues the string on the next
            // line; the implied line break supplies the newline.
            if cursor.is_at_end() {
                self.pending = Some(Pending::ShortString { quote, value, start });
                return Ok(None);
            }
            value.push(parse_escape(cursor)?);
        }
    }
}

/// Decodes the escape whose first character (after the backslash) is at the
/// cursor, leaving the cursor past it.
///
/// `\` followed by a line break decodes to `\n`. A decimal escape takes up
/// to three digits and wraps modulo 256.
fn parse_escape(cursor: &mut Cursor<'_>) -> Result<char> {
    let position = cursor.location();
    let decoded = match cursor.current_char() {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        '\\' => '\\',
        '"' => '"',
        '\'' => '\'',
        '\n' => '\n',
        '\r' => {
            cursor.advance();
            cursor.match_char('\n');
            return Ok('\n');
        },
        '0'..='9' => return Ok(parse_decimal_escape(cursor)),
        other => return Err(LexerError::at(position, LexerErrorKind::InvalidEscape(other))),
    };
    cursor.advance();
    Ok(decoded)
}

fn parse_decimal_escape(cursor: &mut Cursor<'_>) -> char {
    let mut value: u32 = 0;
    for _ in 0..3 {
        match cursor.current_char().to_digit(10) {
            Some(digit) if !cursor.is_at_end() => {
                value = value * 10 + digit;
                cursor.advance();
            },
            _ => break,
        }
    }
    char::from((value % 256) as u8)
}
