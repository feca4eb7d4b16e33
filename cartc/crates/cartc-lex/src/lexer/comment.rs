//! Comment lexing.
//!
//! `--` starts a comment. When the declared version supports long comments
//! and a long-bracket opener follows, the comment runs to the matching
//! closer; otherwise it runs to the end of the line.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::Lexer;

use super::core::BracketKind;
use super::long_bracket::long_bracket_level;

impl Lexer {
    /// Lexes a comment starting at `--`.
    ///
    /// Returns `None` when a long comment is left open at the end of the
    /// chunk.
    pub(super) fn lex_comment(&mut self, cursor: &mut Cursor<'_>) -> Option<Token> {
        let start = cursor.position();
        let position = cursor.location();
        cursor.advance();
        cursor.advance();

        if self.version().supports_long_comments() {
            if let Some(level) = long_bracket_level(cursor.remaining()) {
                cursor.advance_bytes(level + 2);
                let opener = cursor.slice_from(start).to_string();
                return self.lex_long_bracket_body(
                    cursor,
                    BracketKind::Comment,
                    level,
                    opener,
                    position,
                );
            }
        }

        cursor.advance_while(|c| c != '\n' && c != '\r');
        Some(Token::new(TokenKind::Comment, cursor.slice_from(start), position))
    }
}
