//! Token type definitions.
//!
//! A [`Token`] is an immutable value: a [`TokenKind`], the text it was made
//! from, and the zero-based position of its first character. Equality and
//! hashing look at kind and text only, so tokens can be compared by shape
//! without caring where they appeared.

use std::fmt;
use std::hash::{Hash, Hasher};

use cartc_util::Position;

/// Reserved words of the language, in alphabetical order.
pub const KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Returns true if `ident` is a reserved word. The check is case-sensitive.
///
/// ```
/// use cartc_lex::token::is_keyword;
///
/// assert!(is_keyword("elseif"));
/// assert!(!is_keyword("android"));
/// assert!(!is_keyword("And"));
/// ```
pub fn is_keyword(ident: &str) -> bool {
    KEYWORDS.binary_search(&ident).is_ok()
}

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of spaces and tabs.
    Space,
    /// A single line terminator: `\n`, `\r\n`, or `\r`.
    Newline,
    /// A reserved word.
    Keyword,
    /// An identifier that is not a reserved word.
    Name,
    /// A goto label, `::name::`.
    Label,
    /// A string literal. Quoted strings hold their decoded value; long-bracket
    /// strings hold the exact source span, delimiters included.
    String,
    /// A numeric literal, verbatim and unsigned.
    Number,
    /// A comment, from `--` through end of line or through the long-bracket closer.
    Comment,
    /// An operator or punctuation symbol.
    Symbol,
}

impl TokenKind {
    /// The kind's name as used in token listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Space => "Space",
            TokenKind::Newline => "Newline",
            TokenKind::Keyword => "Keyword",
            TokenKind::Name => "Name",
            TokenKind::Label => "Label",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::Comment => "Comment",
            TokenKind::Symbol => "Symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical token.
#[derive(Clone, Debug)]
pub struct Token {
    kind: TokenKind,
    text: String,
    position: Position,
}

impl Token {
    /// Creates a token at the given position.
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// A `Space` token at the start position, for comparisons.
    pub fn space(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Space, text, Position::START)
    }

    /// A `Newline` token at the start position, for comparisons.
    pub fn newline(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Newline, text, Position::START)
    }

    /// A `Keyword` token at the start position, for comparisons.
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, text, Position::START)
    }

    /// A `Name` token at the start position, for comparisons.
    pub fn name(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Name, text, Position::START)
    }

    /// A `Label` token at the start position, for comparisons.
    pub fn label(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Label, text, Position::START)
    }

    /// A `String` token at the start position, for comparisons.
    pub fn string(text: impl Into<String>) -> Self {
        Self::new(TokenKind::String, text, Position::START)
    }

    /// A `Number` token at the start position, for comparisons.
    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text, Position::START)
    }

    /// A `Comment` token at the start position, for comparisons.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Comment, text, Position::START)
    }

    /// A `Symbol` token at the start position, for comparisons.
    pub fn symbol(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Symbol, text, Position::START)
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the token's first character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Zero-based line index of the token's first character.
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Zero-based column of the token's first character.
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Length of the token text in characters, the unit columns count in.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if this token has the shape described by `pattern`.
    ///
    /// A [`TokenKind`] pattern checks the kind only; a `&Token` pattern
    /// checks kind and text.
    ///
    /// ```
    /// use cartc_lex::{Token, TokenKind};
    ///
    /// let tok = Token::keyword("break");
    /// assert!(tok.matches(TokenKind::Keyword));
    /// assert!(tok.matches(&Token::keyword("break")));
    /// assert!(!tok.matches(&Token::keyword("and")));
    /// assert!(!tok.matches(TokenKind::Space));
    /// ```
    pub fn matches<P: TokenPattern>(&self, pattern: P) -> bool {
        pattern.matches_token(self)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} {:?} at line {} char {}>",
            self.kind, self.text, self.position.line, self.position.column
        )
    }
}

/// Something a [`Token`] can be matched against.
pub trait TokenPattern {
    /// Returns true if `token` has this pattern's shape.
    fn matches_token(&self, token: &Token) -> bool;
}

impl TokenPattern for TokenKind {
    fn matches_token(&self, token: &Token) -> bool {
        token.kind == *self
    }
}

impl TokenPattern for &Token {
    fn matches_token(&self, token: &Token) -> bool {
        token == *self
    }
}
