//! Per-kind token tally and its fixed-order report.

use std::fmt;

use minipas_lex::TokenKind;

/// Running count of scanned tokens by kind.
///
/// The end-of-stream marker is not a token class and is never tallied. The
/// `Display` form is the eight-line census in the order the report has
/// always used: keywords, identifiers, numbers, operators, compound
/// operators, delimiters, comments, unknown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    keywords: u64,
    identifiers: u64,
    numbers: u64,
    operators: u64,
    compound_operators: u64,
    delimiters: u64,
    comments: u64,
    unknowns: u64,
}

impl Census {
    /// Adds one token of the given kind to the tally.
    pub fn record(&mut self, kind: TokenKind) {
        match kind {
            TokenKind::Keyword => self.keywords += 1,
            TokenKind::Identifier => self.identifiers += 1,
            TokenKind::Number => self.numbers += 1,
            TokenKind::Operator => self.operators += 1,
            TokenKind::CompoundOperator => self.compound_operators += 1,
            TokenKind::Delimiter => self.delimiters += 1,
            TokenKind::Comment => self.comments += 1,
            TokenKind::Unknown => self.unknowns += 1,
            TokenKind::EndOfStream => {}
        }
    }

    /// Total number of tallied tokens.
    pub fn total(&self) -> u64 {
        self.keywords
            + self.identifiers
            + self.numbers
            + self.operators
            + self.compound_operators
            + self.delimiters
            + self.comments
            + self.unknowns
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", TokenKind::Keyword, self.keywords)?;
        writeln!(f, "{}: {}", TokenKind::Identifier, self.identifiers)?;
        writeln!(f, "{}: {}", TokenKind::Number, self.numbers)?;
        writeln!(f, "{}: {}", TokenKind::Operator, self.operators)?;
        writeln!(f, "{}: {}", TokenKind::CompoundOperator, self.compound_operators)?;
        writeln!(f, "{}: {}", TokenKind::Delimiter, self.delimiters)?;
        writeln!(f, "{}: {}", TokenKind::Comment, self.comments)?;
        writeln!(f, "{}: {}", TokenKind::Unknown, self.unknowns)
    }
}
