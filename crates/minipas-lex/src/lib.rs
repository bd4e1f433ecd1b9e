//! minipas-lex - Lexical Analyzer for the minipas language
//!
//! This crate tokenizes source text written in a small Pascal-like
//! language. The scanner is pull-based: each call to
//! [`Scanner::next_token`] consumes the next token, and once the source is
//! exhausted every further call yields the end-of-stream token.
//!
//! # Overview
//!
//! Scanning never fails. A character that belongs to no class produces an
//! [`Unknown`](TokenKind::Unknown) token and the scan carries on, so a
//! whole file can always be tokenized in one pass. Tokens are classified
//! by a fixed priority chain over the first significant character:
//! identifiers and keywords, numbers, comments, compound operators, then
//! single operators and delimiters.
//!
//! # Example Usage
//!
//! ```
//! use minipas_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("x := 5;".chars());
//!
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::Identifier);
//! assert_eq!(token.lexeme, "x");
//!
//! let kinds: Vec<_> = scanner.map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::CompoundOperator, TokenKind::Number, TokenKind::Delimiter]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token and token-kind types
//! - [`tables`] - keyword, operator, compound-operator and delimiter tables
//! - [`cursor`] - pushback character cursor the scanner reads through
//! - [`scanner`] - the scanner itself, split by token class

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod scanner;
pub mod tables;
pub mod token;

#[cfg(test)]
mod roundtrip;

pub use cursor::Cursor;
pub use scanner::{Scanner, ScannerConfig};
pub use tables::{is_compound_operator, is_delimiter, is_keyword, is_operator};
pub use token::{Token, TokenKind};
