//! Operator and punctuation lexing.
//!
//! Longer symbols win over their prefixes: `...` over `..` over `.`, and the
//! compound assignments (`+=`, `-=`, `*=`, `/=`, `%=`) over the bare
//! operators. Both `~=` and `!=` spell not-equal.

use crate::cursor::Cursor;
use crate::error::{LexerError, LexerErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes an operator or punctuation symbol.
    ///
    /// Fails with [`LexerErrorKind::UnexpectedCharacter`] if no symbol starts
    /// at the cursor. `--` never reaches here; it is a comment.
    pub(super) fn lex_symbol(&self, cursor: &mut Cursor<'_>) -> Result<Token> {
        let start = cursor.position();
        let position = cursor.location();
        let c = cursor.current_char();

        match c {
            // Arithmetic, optionally compound-assigned
            '+' | '-' | '*' | '/' | '%' => {
                cursor.advance();
                cursor.match_char('=');
            },

            // Comparison and assignment
            '=' | '<' | '>' => {
                cursor.advance();
                cursor.match_char('=');
            },
            '~' | '!' if cursor.peek_char(1) == '=' => {
                cursor.advance();
                cursor.advance();
            },

            '.' => {
                cursor.advance();
                if cursor.match_char('.') {
                    cursor.match_char('.');
                }
            },

            '^' | '#' | '(' | ')' | '{' | '}' | '[' | ']' | ';' | ':' | ',' => {
                cursor.advance();
            },

            _ => {
                return Err(LexerError::at(
                    position,
                    LexerErrorKind::UnexpectedCharacter(c),
                ))
            },
        }

        Ok(Token::new(TokenKind::Symbol, cursor.slice_from(start), position))
    }
}
