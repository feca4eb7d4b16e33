//! cartc-lex - Lexical Analyzer for Cartridge Source Code
//!
//! This crate turns cartridge source text, fed line by line, into an ordered
//! and lossless sequence of tokens for the parser. It pinpoints the line and
//! column of any malformed input.
//!
//! # Example Usage
//!
//! ```
//! use cartc_lex::{Lexer, Token, TokenKind, Version};
//!
//! let mut lexer = Lexer::new(Version(8));
//! lexer.process_line("x = [[multi\n").unwrap();
//! lexer.process_line("line]] -- done\n").unwrap();
//! lexer.finish().unwrap();
//!
//! let tokens = lexer.tokens();
//! assert_eq!(tokens[4], Token::string("[[multi\nline]]"));
//! assert!(tokens[6].matches(TokenKind::Comment));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical error types
//! - [`config`] - Declared version and lexer configuration
//!
//! # Token Categories
//!
//! - **Space**: runs of spaces and tabs
//! - **Newline**: `\n`, `\r\n`, or `\r`
//! - **Keyword**: `and break do else elseif end false for function goto if in
//!   local nil not or repeat return then true until while`
//! - **Name**: other identifiers, `[a-zA-Z_][a-zA-Z0-9_]*`
//! - **Label**: `::name::`
//! - **String**: `"..."` and `'...'` (decoded), `[[...]]` and `[==[...]==]` (verbatim)
//! - **Number**: `42`, `1.5`, `1e-6`, `0xff`, `0x1f.8`
//! - **Comment**: `-- ...` and, from [`Version::LONG_COMMENTS`], `--[[ ... ]]`
//! - **Symbol**: `+ - * / % ^ # == ~= != <= >= < > = ( ) { } [ ] ; : , . .. ...`
//!   and the compound assignments `+= -= *= /= %=`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

// Re-export main types for convenience
pub use config::{ConfigError, LexerConfig, Version};
pub use cursor::Cursor;
pub use error::{LexerError, LexerErrorKind, Result};
pub use lexer::Lexer;
pub use token::{is_keyword, Token, TokenKind, TokenPattern};
