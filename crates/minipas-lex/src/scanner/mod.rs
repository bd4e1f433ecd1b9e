//! Scanner implementation, split by token class:
//!
//! - `core` - the `Scanner` struct, configuration and dispatch
//! - `identifier` - identifiers and keywords
//! - `number` - unsigned integer literals
//! - `comment` - `{ ... }` comments and the optional `(* ... *)` form
//! - `operator` - compound-operator lookahead and single-character fallback

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::{Scanner, ScannerConfig};
