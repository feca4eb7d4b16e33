//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - `Lexer` state, line ingestion, and dispatch
//! - `identifier` - Identifiers, keywords, and labels
//! - `number` - Numeric literals
//! - `string` - Quoted strings and escape decoding
//! - `long_bracket` - Long-bracket strings and comments
//! - `comment` - `--` comments
//! - `operator` - Operators and punctuation

mod comment;
mod core;
mod identifier;
mod long_bracket;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
