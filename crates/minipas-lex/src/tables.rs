//! Classification tables.
//!
//! Four disjoint tables drive classification: reserved keywords,
//! single-character operators, two-character compound operators and
//! single-character delimiters. The tables are fixed at compile time and
//! every lookup is an exact, case-sensitive comparison.

/// Reserved words of the language.
pub const KEYWORDS: [&str; 22] = [
    "and",
    "array",
    "begin",
    "div",
    "do",
    "else",
    "end",
    "function",
    "goto",
    "if",
    "label",
    "not",
    "of",
    "or",
    "procedure",
    "program",
    "then",
    "id",
    "var",
    "while",
    "read",
    "write",
];

/// Single-character operators.
pub const OPERATORS: [char; 7] = ['+', '-', '*', '/', '=', '<', '>'];

/// Two-character compound operators.
pub const COMPOUND_OPERATORS: [&str; 4] = [":=", "<>", "<=", ">="];

/// Single-character delimiters.
pub const DELIMITERS: [char; 6] = [';', ',', '.', '(', ')', ':'];

/// True if `word` is a reserved keyword.
///
/// The comparison is case-sensitive: `begin` is a keyword, `Begin` is an
/// ordinary identifier.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// True if `c` is a single-character operator.
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// True if `pair` is one of the two-character compound operators.
pub fn is_compound_operator(pair: &str) -> bool {
    COMPOUND_OPERATORS.contains(&pair)
}

/// True if `c` is a single-character delimiter.
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}
