//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the pending-construct state that
//! carries an open string or long bracket from one line to the next, and the
//! top-level dispatch on the current character.

use cartc_util::Position;
use tracing::{debug, trace};

use crate::config::{LexerConfig, Version};
use crate::cursor::Cursor;
use crate::error::{LexerError, LexerErrorKind, Result};
use crate::token::{Token, TokenKind};

use super::identifier::{is_ident_start, label_len};
use super::long_bracket::long_bracket_level;

/// Which kind of token a long bracket produces when it closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum BracketKind {
    String,
    Comment,
}

impl BracketKind {
    pub(super) fn token_kind(self) -> TokenKind {
        match self {
            BracketKind::String => TokenKind::String,
            BracketKind::Comment => TokenKind::Comment,
        }
    }
}

/// A construct left open at the end of a line.
#[derive(Clone, Debug)]
pub(super) enum Pending {
    /// A quoted string. `value` holds the decoded text so far.
    ShortString {
        quote: char,
        value: String,
        start: Position,
    },
    /// A long-bracket string or comment. `text` holds the raw source so far,
    /// opening delimiter included.
    LongBracket {
        kind: BracketKind,
        level: usize,
        text: String,
        start: Position,
    },
}

impl Pending {
    /// Records a line break that the caller implied by supplying a line
    /// without a terminator.
    fn break_line(&mut self) {
        match self {
            Pending::ShortString { value, .. } => value.push('\n'),
            Pending::LongBracket { text, .. } => text.push('\n'),
        }
    }

    fn unterminated(&self) -> LexerError {
        match *self {
            Pending::ShortString { start, .. } => {
                LexerError::at(start, LexerErrorKind::UnterminatedString)
            },
            Pending::LongBracket {
                kind: BracketKind::String,
                level,
                start,
                ..
            } => LexerError::at(start, LexerErrorKind::UnterminatedLongString { level }),
            Pending::LongBracket {
                kind: BracketKind::Comment,
                level,
                start,
                ..
            } => LexerError::at(start, LexerErrorKind::UnterminatedLongComment { level }),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Pending::ShortString { .. } => "string",
            Pending::LongBracket {
                kind: BracketKind::String,
                ..
            } => "long string",
            Pending::LongBracket {
                kind: BracketKind::Comment,
                ..
            } => "long comment",
        }
    }
}

/// Incremental lexer for cartridge source code.
///
/// Lines are pushed in with [`Lexer::process_line`] (or in bulk with
/// [`Lexer::process_lines`]) and tokens accumulate in emission order. A
/// string or long bracket left open at the end of a line stays pending until
/// a later line closes it; [`Lexer::finish`] reports it if input ends first.
///
/// # Example
///
/// ```
/// use cartc_lex::{Lexer, Token, Version};
///
/// let mut lexer = Lexer::new(Version::CURRENT);
/// lexer.process_lines(["a += 1\n"]).unwrap();
///
/// assert_eq!(lexer.tokens()[0], Token::name("a"));
/// assert_eq!(lexer.tokens()[2], Token::symbol("+="));
/// assert_eq!(lexer.tokens().len(), 6);
/// ```
#[derive(Debug)]
pub struct Lexer {
    /// Declared version and logging options.
    config: LexerConfig,

    /// Tokens emitted so far, in order.
    tokens: Vec<Token>,

    /// Index of the line the next ingestion call starts on.
    line: u32,

    /// Open construct carried over from a previous line.
    pub(super) pending: Option<Pending>,
}

impl Lexer {
    /// Creates a lexer for the given declared version.
    pub fn new(version: impl Into<Version>) -> Self {
        Self::with_config(LexerConfig::for_version(version))
    }

    /// Creates a lexer from a full configuration.
    pub fn with_config(config: LexerConfig) -> Self {
        debug!(
            version = config.version.0,
            long_comments = config.version.supports_long_comments(),
            "creating lexer"
        );
        Self {
            config,
            tokens: Vec::new(),
            line: 0,
            pending: None,
        }
    }

    /// Lexes `source` in one go, splitting it into lines on `\n`.
    ///
    /// ```
    /// use cartc_lex::{Lexer, Token, Version};
    ///
    /// let tokens = Lexer::tokenize("-- hello\nt = 0\n", Version::CURRENT).unwrap();
    /// assert_eq!(tokens[0], Token::comment("-- hello"));
    /// assert_eq!(tokens[1], Token::newline("\n"));
    /// ```
    pub fn tokenize(source: &str, version: impl Into<Version>) -> Result<Vec<Token>> {
        let mut lexer = Self::new(version);
        lexer.process_lines(source.split_inclusive('\n'))?;
        Ok(lexer.into_tokens())
    }

    /// The declared version.
    pub fn version(&self) -> Version {
        self.config.version
    }

    /// The lexer's configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// All tokens emitted so far, in emission order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the lexer, returning its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Zero-based index of the line the next ingestion call starts on.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns true if a string or long bracket is still open.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Lexes one line of input.
    ///
    /// The text may end in a line terminator, which becomes a `Newline`
    /// token. Text without a trailing terminator is taken to be followed by
    /// a line break: the next call starts on the following line, and an open
    /// construct records the break as `\n`.
    ///
    /// On error, tokens emitted before the offending character are kept and
    /// the rest of the line is not scanned.
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        let mut cursor = Cursor::new(line, self.line);

        if let Err(err) = self.scan(&mut cursor) {
            debug!(line = err.line, column = err.column, error = %err.kind, "lexical error");
            return Err(err);
        }

        self.line = cursor.line();
        if !line.ends_with(&['\n', '\r'][..]) {
            if let Some(pending) = self.pending.as_mut() {
                pending.break_line();
            }
            self.line += 1;
        }

        if let Some(pending) = &self.pending {
            debug!(construct = pending.describe(), line = self.line, "construct continues on next line");
        }
        Ok(())
    }

    /// Lexes a sequence of lines, then checks that nothing is left open.
    ///
    /// The first error stops processing; later lines are not read.
    pub fn process_lines<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.process_line(line.as_ref())?;
        }
        self.finish()
    }

    /// Declares the end of input, failing if a string or long bracket is
    /// still open. The error points at the construct's opening delimiter.
    pub fn finish(&self) -> Result<()> {
        match &self.pending {
            Some(pending) => {
                let err = pending.unterminated();
                debug!(line = err.line, column = err.column, error = %err.kind, "lexical error");
                Err(err)
            },
            None => Ok(()),
        }
    }

    /// Scans the cursor's chunk, first resolving any pending construct.
    fn scan(&mut self, cursor: &mut Cursor<'_>) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            self.resume(pending, cursor)?;
        }

        while !cursor.is_at_end() && self.pending.is_none() {
            self.next_token(cursor)?;
        }
        Ok(())
    }

    fn resume(&mut self, pending: Pending, cursor: &mut Cursor<'_>) -> Result<()> {
        let describe = pending.describe();
        let token = match pending {
            Pending::ShortString { quote, value, start } => {
                self.lex_short_string_body(cursor, quote, value, start)?
            },
            Pending::LongBracket {
                kind,
                level,
                text,
                start,
            } => self.lex_long_bracket_body(cursor, kind, level, text, start),
        };

        if let Some(token) = token {
            debug!(construct = describe, opened = %token.position(), "pending construct closed");
            self.push(token);
        }
        Ok(())
    }

    /// Lexes one token at the cursor and appends it.
    ///
    /// Dispatches on the current character. A string or long bracket that
    /// runs off the end of the chunk produces no token yet; it becomes the
    /// pending construct instead.
    fn next_token(&mut self, cursor: &mut Cursor<'_>) -> Result<()> {
        let start = cursor.position();
        let position = cursor.location();

        let token = match cursor.current_char() {
            ' ' | '\t' => {
                cursor.advance_while(|c| c == ' ' || c == '\t');
                Some(Token::new(TokenKind::Space, cursor.slice_from(start), position))
            },
            '\n' => {
                cursor.advance();
                Some(Token::new(TokenKind::Newline, "\n", position))
            },
            '\r' => {
                cursor.advance();
                cursor.match_char('\n');
                Some(Token::new(TokenKind::Newline, cursor.slice_from(start), position))
            },
            '-' if cursor.peek_char(1) == '-' => self.lex_comment(cursor),
            '[' if long_bracket_level(cursor.remaining()).is_some() => {
                self.lex_long_string(cursor)
            },
            '"' | '\'' => self.lex_short_string(cursor)?,
            ':' if label_len(cursor.remaining()).is_some() => Some(self.lex_label(cursor)),
            c if is_ident_start(c) => Some(self.lex_identifier(cursor)),
            c if c.is_ascii_digit() => Some(self.lex_number(cursor)),
            '.' if cursor.peek_char(1).is_ascii_digit() => Some(self.lex_number(cursor)),
            _ => Some(self.lex_symbol(cursor)?),
        };

        if let Some(token) = token {
            self.push(token);
        }
        Ok(())
    }

    fn push(&mut self, token: Token) {
        if self.config.trace_tokens {
            trace!(kind = %token.kind(), text = ?token.text(), at = %token.position(), "token");
        }
        self.tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(line: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(Version::CURRENT);
        lexer.process_line(line).unwrap();
        lexer.into_tokens()
    }

    #[test]
    fn test_space_and_newline_are_separate() {
        let tokens = lex("    \n");
        assert_eq!(tokens, vec![Token::space("    "), Token::newline("\n")]);
    }

    #[test]
    fn test_crlf_is_one_newline() {
        let tokens = lex("x\r\n");
        assert_eq!(tokens, vec![Token::name("x"), Token::newline("\r\n")]);
    }

    #[test]
    fn test_lone_cr_is_newline() {
        let mut lexer = Lexer::new(Version::CURRENT);
        lexer.process_line("a\rb").unwrap();
        assert_eq!(lexer.tokens()[1], Token::newline("\r"));
        assert_eq!(lexer.tokens()[2].position(), Position::new(1, 0));
    }

    #[test]
    fn test_line_counter_advances_per_call() {
        let mut lexer = Lexer::new(Version::CURRENT);
        lexer.process_line("a").unwrap();
        lexer.process_line("").unwrap();
        lexer.process_line("b\n").unwrap();
        assert_eq!(lexer.line(), 3);
        assert_eq!(lexer.tokens()[1].position(), Position::new(2, 0));
    }

    #[test]
    fn test_embedded_newlines_advance_line() {
        let tokens = lex("a\n  b\n");
        let b = &tokens[3];
        assert_eq!(b, &Token::name("b"));
        assert_eq!(b.position(), Position::new(1, 2));
    }

    #[test]
    fn test_pending_state_lifecycle() {
        let mut lexer = Lexer::new(Version::CURRENT);
        lexer.process_line("s = [[one\n").unwrap();
        assert!(lexer.has_pending());
        assert!(lexer.finish().is_err());

        lexer.process_line("two]] x\n").unwrap();
        assert!(!lexer.has_pending());
        assert!(lexer.finish().is_ok());
        assert_eq!(lexer.tokens()[4], Token::string("[[one\ntwo]]"));
        assert_eq!(lexer.tokens()[6], Token::name("x"));
    }

    #[test]
    fn test_error_keeps_earlier_tokens() {
        let mut lexer = Lexer::new(Version::CURRENT);
        let err = lexer.process_line("a = $").unwrap_err();
        assert_eq!(err.kind, LexerErrorKind::UnexpectedCharacter('$'));
        assert_eq!(err.column, 5);
        assert_eq!(lexer.tokens().len(), 4);
    }

    #[test]
    fn test_trace_tokens_config() {
        let config = LexerConfig {
            version: Version(4),
            trace_tokens: true,
        };
        let mut lexer = Lexer::with_config(config);
        lexer.process_line("x").unwrap();
        assert_eq!(lexer.version(), Version(4));
        assert!(lexer.config().trace_tokens);
        assert_eq!(lexer.tokens(), &[Token::name("x")]);
    }
}
