//! Comment scanning.
//!
//! Braced `{ ... }` comments are the reference form and are always on. The
//! `(* ... *)` form is an opt-in extension, enabled through
//! [`ScannerConfig::paren_comments`](crate::ScannerConfig).

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans a `{ ... }` comment; the opening `{` is already consumed.
    ///
    /// Characters are copied verbatim until a `}` is read or the source
    /// ends. The closing `}` is appended to the lexeme unconditionally, so
    /// an unterminated comment still yields a `}`-terminated lexeme. That
    /// normalization is part of the published contract.
    pub(crate) fn scan_brace_comment(&mut self) -> Token {
        let mut lexeme = String::from('{');
        loop {
            match self.cursor.read() {
                Some('}') | None => break,
                Some(c) => lexeme.push(c),
            }
        }
        lexeme.push('}');
        Token::new(TokenKind::Comment, lexeme)
    }

    /// Scans a `(* ... *)` comment, or falls back to the `(` delimiter.
    ///
    /// The opening `(` is already consumed. A `(` not followed by `*` is
    /// no comment at all: the lookahead goes back and the `(` classifies
    /// through the ordinary single-character fallback. The terminator is
    /// the first `*` immediately followed by `)`; a `*` followed by
    /// anything else stays comment text. Unlike the braced form, an
    /// unterminated `(*` comment ends at the source with no terminator
    /// appended.
    pub(crate) fn scan_paren_comment(&mut self) -> Token {
        if !self.cursor.match_char('*') {
            return self.classify_single('(');
        }

        let mut lexeme = String::from("(*");
        while let Some(c) = self.cursor.read() {
            lexeme.push(c);
            if c == '*' && self.cursor.match_char(')') {
                lexeme.push(')');
                break;
            }
        }
        Token::new(TokenKind::Comment, lexeme)
    }
}
