//! Long-bracket lexing.
//!
//! A long bracket opens with `[`, N `=` signs, `[` and closes with `]`,
//! exactly N `=` signs, `]`. Its body is raw text: no escapes, and quotes,
//! dashes, and line breaks are all just content. The emitted token holds the
//! exact source span, delimiters included.

use cartc_util::Position;

use crate::cursor::Cursor;
use crate::token::Token;
use crate::Lexer;

use super::core::{BracketKind, Pending};

/// If `text` starts with a long-bracket opener, returns its level (the number
/// of `=` signs).
pub(super) fn long_bracket_level(text: &str) -> Option<usize> {
    let rest = text.strip_prefix('[')?;
    let level = rest.bytes().take_while(|&b| b == b'=').count();
    rest[level..].starts_with('[').then_some(level)
}

fn closing_delimiter(level: usize) -> String {
    format!("]{}]", "=".repeat(level))
}

impl Lexer {
    /// Lexes a long-bracket string starting at its opener.
    pub(super) fn lex_long_string(&mut self, cursor: &mut Cursor<'_>) -> Option<Token> {
        let start = cursor.position();
        let position = cursor.location();
        let level = long_bracket_level(cursor.remaining())?;
        cursor.advance_bytes(level + 2);

        let opener = cursor.slice_from(start).to_string();
        self.lex_long_bracket_body(cursor, BracketKind::String, level, opener, position)
    }

    /// Scans for the closer of a level-`level` long bracket, appending body
    /// text to `text`.
    ///
    /// If the closer is in this chunk, returns the finished token and leaves
    /// the cursor just past it. Otherwise consumes the whole chunk and parks
    /// the construct as pending.
    pub(super) fn lex_long_bracket_body(
        &mut self,
        cursor: &mut Cursor<'_>,
        kind: BracketKind,
        level: usize,
        mut text: String,
        start: Position,
    ) -> Option<Token> {
        let closer = closing_delimiter(level);
        let rest = cursor.remaining();

        match rest.find(&closer) {
            Some(offset) => {
                let end = offset + closer.len();
                text.push_str(&rest[..end]);
                cursor.advance_bytes(end);
                Some(Token::new(kind.token_kind(), text, start))
            },
            None => {
                text.push_str(rest);
                cursor.advance_to_end();
                self.pending = Some(Pending::LongBracket {
                    kind,
                    level,
                    text,
                    start,
                });
                None
            },
        }
    }
}
