//! Core scanner: the `Scanner` struct, its configuration and the
//! classification dispatch.

use crate::cursor::Cursor;
use crate::token::Token;

/// Scanner options.
///
/// The defaults reproduce the reference behavior; every extension is
/// opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Also recognize `(* ... *)` comments in addition to `{ ... }`.
    pub paren_comments: bool,
}

/// Pull-based tokenizer for minipas source text.
///
/// Call [`next_token`](Scanner::next_token) repeatedly: each call yields
/// one token, and once the source is exhausted every further call yields
/// the end-of-stream token. The scanner never fails; input that matches no
/// class comes back as an [`Unknown`](crate::TokenKind::Unknown) token and
/// scanning continues with the next character.
pub struct Scanner<I: Iterator<Item = char>> {
    pub(crate) cursor: Cursor<I>,
    pub(crate) config: ScannerConfig,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Creates a scanner with the default configuration.
    pub fn new(chars: I) -> Self {
        Self::with_config(chars, ScannerConfig::default())
    }

    /// Creates a scanner with explicit options.
    pub fn with_config(chars: I, config: ScannerConfig) -> Self {
        Self {
            cursor: Cursor::new(chars),
            config,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Leading whitespace is consumed and discarded. Classification is a
    /// priority chain over the first significant character; the first arm
    /// that matches wins, which is what keeps the token classes disjoint.
    pub fn next_token(&mut self) -> Token {
        let first = match self.cursor.read_nonspace() {
            Some(c) => c,
            None => return Token::end_of_stream(),
        };

        match first {
            c if c.is_ascii_alphabetic() => self.scan_identifier(c),
            c if c.is_ascii_digit() => self.scan_number(c),
            '{' => self.scan_brace_comment(),
            '(' if self.config.paren_comments => self.scan_paren_comment(),
            ':' | '<' | '>' => self.scan_compound(first),
            c => self.classify_single(c),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Token;

    /// Yields tokens up to, but not including, end of stream.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end_of_stream() {
            None
        } else {
            Some(token)
        }
    }
}
