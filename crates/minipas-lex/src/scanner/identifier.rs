//! Identifier and keyword scanning.

use crate::tables::is_keyword;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans an identifier or keyword whose first character is `first`.
    ///
    /// Accumulates the maximal run of ASCII alphanumerics, pushes back the
    /// character that ended the run, then decides between keyword and
    /// identifier with a case-sensitive table lookup. Underscores are not
    /// identifier characters in this language.
    pub(crate) fn scan_identifier(&mut self, first: char) -> Token {
        let mut lexeme = String::from(first);
        while let Some(c) = self.cursor.read_if(|c| c.is_ascii_alphanumeric()) {
            lexeme.push(c);
        }

        let kind = if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, lexeme)
    }
}
