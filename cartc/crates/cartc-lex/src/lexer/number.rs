//! Number literal lexing.
//!
//! Numbers are kept verbatim and unsigned; a leading `-` is always its own
//! symbol, so negation is left to the parser.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `1.5`, `1.`, `.5`
    /// - Exponent: `1e10`, `1.234567890e-6`, `3E+2`
    /// - Hexadecimal: `0xff`, `0X1F.8`
    ///
    /// An `e` not followed by exponent digits, or a `0x` not followed by
    /// hex digits, is left for the next token.
    pub(super) fn lex_number(&self, cursor: &mut Cursor<'_>) -> Token {
        let start = cursor.position();
        let position = cursor.location();

        if has_hex_prefix(cursor) {
            cursor.advance();
            cursor.advance();
            cursor.advance_while(|c| c.is_ascii_hexdigit());
            if cursor.current_char() == '.' && cursor.peek_char(1) != '.' {
                cursor.advance();
                cursor.advance_while(|c| c.is_ascii_hexdigit());
            }
        } else {
            cursor.advance_while(|c| c.is_ascii_digit());
            if cursor.current_char() == '.' && cursor.peek_char(1) != '.' {
                cursor.advance();
                cursor.advance_while(|c| c.is_ascii_digit());
            }
            lex_exponent(cursor);
        }

        Token::new(TokenKind::Number, cursor.slice_from(start), position)
    }
}

fn has_hex_prefix(cursor: &Cursor<'_>) -> bool {
    cursor.current_char() == '0'
        && matches!(cursor.peek_char(1), 'x' | 'X')
        && (cursor.peek_char(2).is_ascii_hexdigit()
            || (cursor.peek_char(2) == '.' && cursor.peek_char(3).is_ascii_hexdigit()))
}

fn lex_exponent(cursor: &mut Cursor<'_>) {
    if !matches!(cursor.current_char(), 'e' | 'E') {
        return;
    }
    let digits_at = if matches!(cursor.peek_char(1), '+' | '-') {
        2
    } else {
        1
    };
    if !cursor.peek_char(digits_at).is_ascii_digit() {
        return;
    }
    for _ in 0..digits_at {
        cursor.advance();
    }
    cursor.advance_while(|c| c.is_ascii_digit());
}
