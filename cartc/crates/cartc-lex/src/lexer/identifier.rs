//! Identifier, keyword, and label lexing.

use crate::cursor::Cursor;
use crate::token::{is_keyword, Token, TokenKind};
use crate::Lexer;

/// Returns true if `c` can start an identifier: an ASCII letter or `_`.
#[inline]
pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub(super) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// If `text` starts with a label (`::name::`), returns its length in bytes.
pub(super) fn label_len(text: &str) -> Option<usize> {
    let rest = text.strip_prefix("::")?;
    if !rest.starts_with(is_ident_start) {
        return None;
    }
    let name_len = rest.find(|c: char| !is_ident_continue(c)).unwrap_or(rest.len());
    rest[name_len..].starts_with("::").then_some(name_len + 4)
}

impl Lexer {
    /// Lexes an identifier or keyword.
    ///
    /// The whole identifier is read first and then checked against the
    /// reserved words, so `android` is a name even though it starts with
    /// `and`.
    pub(super) fn lex_identifier(&self, cursor: &mut Cursor<'_>) -> Token {
        let start = cursor.position();
        let position = cursor.location();
        cursor.advance_while(is_ident_continue);

        let text = cursor.slice_from(start);
        let kind = if is_keyword(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Name
        };
        Token::new(kind, text, position)
    }

    /// Lexes a `::name::` label. The caller has checked that one is present.
    pub(super) fn lex_label(&self, cursor: &mut Cursor<'_>) -> Token {
        let start = cursor.position();
        let position = cursor.location();
        let len = label_len(cursor.remaining()).unwrap_or(0);
        cursor.advance_bytes(len);

        Token::new(TokenKind::Label, cursor.slice_from(start), position)
    }
}
