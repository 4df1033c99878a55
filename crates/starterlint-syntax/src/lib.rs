//! Tree-sitter powered parsing for the `starterlint` checks.
//!
//! This crate wraps the Tree-sitter TypeScript grammars so the detector can
//! work on syntax trees instead of raw text:
//!
//! - **Parsing** via [`Parser`], producing a [`ParseResult`] that records
//!   every syntax error Tree-sitter recovered from
//! - **Node helpers** such as [`member_path`] and [`span_of`] for reading
//!   member chains and locations off the tree
//!
//! # Supported Languages
//!
//! - JavaScript (`.js`, `.mjs`, `.cjs`, `.jsx`)
//! - TypeScript (`.ts`, `.mts`, `.cts`)
//! - TSX (`.tsx`)
//!
//! JavaScript and TSX share the TSX grammar, which accepts plain JavaScript
//! as well as JSX. TypeScript uses the plain TypeScript grammar so that
//! angle-bracket type assertions parse.
//!
//! # Example
//!
//! ```
//! use starterlint_syntax::{Parser, SupportedLanguage, member_path};
//!
//! let mut parser = Parser::new(SupportedLanguage::JavaScript)?;
//! let parsed = parser.parse("QUnit.config.autostart = false;")?;
//! assert!(!parsed.has_errors());
//! # Ok::<(), starterlint_syntax::SyntaxError>(())
//! ```

mod error;
mod language;
mod node;
mod parser;
mod position;

pub use error::SyntaxError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use node::{member_path, node_text, span_of, string_literal_value, unwrap_parentheses};
pub use parser::{ParseResult, Parser, SyntaxErrorInfo};

#[cfg(test)]
mod tests;
