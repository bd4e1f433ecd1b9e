//! Token types produced by the scanner.

use std::fmt;

/// The classification assigned to a scanned token.
///
/// Exactly one kind applies to any piece of input; the scanner's dispatch
/// order keeps the classes mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Alphanumeric word that is not in the keyword table.
    Identifier,
    /// Unsigned integer literal.
    Number,
    /// Reserved word from the keyword table.
    Keyword,
    /// Single-character operator.
    Operator,
    /// Two-character operator: `:=`, `<>`, `<=` or `>=`.
    CompoundOperator,
    /// Single-character delimiter.
    Delimiter,
    /// Braced comment, delimiters included in the lexeme.
    Comment,
    /// Terminal marker: the source is exhausted.
    EndOfStream,
    /// A character that matches no other class.
    Unknown,
}

impl TokenKind {
    /// Report label for this kind, matching the census output spelling.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::CompoundOperator => "COMPOUND OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Comment => "COMMENTS",
            TokenKind::EndOfStream => "END OF FILE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One scanned token: its classification and the exact text consumed.
///
/// The lexeme is the literal input that produced the token, comment
/// delimiters included and surrounding whitespace excluded. It is empty
/// only for [`TokenKind::EndOfStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of this token.
    pub kind: TokenKind,
    /// The text consumed to form this token.
    pub lexeme: String,
}

impl Token {
    /// Creates a token from a kind and its lexeme.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The terminal token: `EndOfStream` with an empty lexeme.
    pub fn end_of_stream() -> Self {
        Self::new(TokenKind::EndOfStream, "")
    }

    /// True for the terminal end-of-stream marker.
    pub fn is_end_of_stream(&self) -> bool {
        self.kind == TokenKind::EndOfStream
    }
}
