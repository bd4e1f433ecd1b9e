//! Number scanning.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans an unsigned integer literal whose first digit is `first`.
    ///
    /// Only plain decimal digit runs are numbers: no sign, no decimal
    /// point, no exponent. The character that ended the run is pushed back
    /// and classified on the next call.
    pub(crate) fn scan_number(&mut self, first: char) -> Token {
        let mut lexeme = String::from(first);
        while let Some(c) = self.cursor.read_if(|c| c.is_ascii_digit()) {
            lexeme.push(c);
        }
        Token::new(TokenKind::Number, lexeme)
    }
}
