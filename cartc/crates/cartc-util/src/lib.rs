//! cartc-util - Core Utilities and Foundation Types
//!
//! Foundation types shared by the cartc compiler phases:
//!
//! - [`span`] - Source positions (zero-based storage, one-based display)
//! - [`diagnostic`] - Severity levels, diagnostics, and caret-annotated source snippets
//!
//! # Examples
//!
//! ```
//! use cartc_util::{Diagnostic, Position, SourceSnippet};
//!
//! let position = Position::new(0, 4);
//! let diag = Diagnostic::error("unexpected character '@'", position)
//!     .with_snippet(SourceSnippet::point("123 @ 456", 1, 5));
//!
//! assert!(diag.to_string().starts_with("error: unexpected character '@'"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Level, SourceSnippet};
pub use span::Position;
