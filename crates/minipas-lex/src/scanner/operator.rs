//! Compound-operator lookahead and single-character classification.

use crate::tables::{is_compound_operator, is_delimiter, is_operator};
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Resolves a `:`, `<` or `>` start into a compound or single token.
    ///
    /// One character of lookahead decides: if the pair is in the compound
    /// table (`:=`, `<>`, `<=`, `>=`) it is consumed whole, otherwise the
    /// lookahead goes back and `first` classifies on its own. `>` followed
    /// by `<` is two operators, not a compound.
    pub(crate) fn scan_compound(&mut self, first: char) -> Token {
        if let Some(next) = self.cursor.read() {
            let mut pair = String::from(first);
            pair.push(next);
            if is_compound_operator(&pair) {
                return Token::new(TokenKind::CompoundOperator, pair);
            }
            self.cursor.unread(next);
        }
        self.classify_single(first)
    }

    /// Classifies one character against the operator and delimiter tables.
    ///
    /// Anything in neither table is an `Unknown` token, never an error.
    pub(crate) fn classify_single(&self, c: char) -> Token {
        let kind = if is_operator(c) {
            TokenKind::Operator
        } else if is_delimiter(c) {
            TokenKind::Delimiter
        } else {
            TokenKind::Unknown
        };
        Token::new(kind, c.to_string())
    }
}
