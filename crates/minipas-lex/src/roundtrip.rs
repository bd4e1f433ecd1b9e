//! Round-trip property tests.
//!
//! Renders a generated token sequence to source text with whitespace
//! between tokens, scans it back and checks the scanner reproduces every
//! kind and lexeme exactly.

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;

use crate::tables::{COMPOUND_OPERATORS, DELIMITERS, KEYWORDS, OPERATORS};
use crate::token::TokenKind;
use crate::{is_keyword, Scanner};

/// Characters outside every table that start no other token class.
const UNKNOWN_CHARS: [char; 8] = ['!', '?', '#', '@', '&', '%', '_', ']'];

fn identifier() -> impl Strategy<Value = (TokenKind, String)> {
    "[a-zA-Z][a-zA-Z0-9]{0,11}"
        .prop_filter("reserved words scan as keywords", |s| !is_keyword(s))
        .prop_map(|s| (TokenKind::Identifier, s))
}

fn number() -> impl Strategy<Value = (TokenKind, String)> {
    "[0-9]{1,10}".prop_map(|s| (TokenKind::Number, s))
}

fn keyword() -> impl Strategy<Value = (TokenKind, String)> {
    select(KEYWORDS.to_vec()).prop_map(|s| (TokenKind::Keyword, s.to_string()))
}

fn operator() -> impl Strategy<Value = (TokenKind, String)> {
    select(OPERATORS.to_vec()).prop_map(|c| (TokenKind::Operator, c.to_string()))
}

fn compound_operator() -> impl Strategy<Value = (TokenKind, String)> {
    select(COMPOUND_OPERATORS.to_vec()).prop_map(|s| (TokenKind::CompoundOperator, s.to_string()))
}

fn delimiter() -> impl Strategy<Value = (TokenKind, String)> {
    select(DELIMITERS.to_vec()).prop_map(|c| (TokenKind::Delimiter, c.to_string()))
}

fn comment() -> impl Strategy<Value = (TokenKind, String)> {
    // Braces are excluded from the body so the rendered comment closes
    // exactly where it was generated to close.
    "[a-zA-Z0-9 .,;:+*()=<>-]{0,16}"
        .prop_map(|body| (TokenKind::Comment, format!("{{{body}}}")))
}

fn unknown() -> impl Strategy<Value = (TokenKind, String)> {
    select(UNKNOWN_CHARS.to_vec()).prop_map(|c| (TokenKind::Unknown, c.to_string()))
}

fn any_token() -> impl Strategy<Value = (TokenKind, String)> {
    prop_oneof![
        identifier(),
        number(),
        keyword(),
        operator(),
        compound_operator(),
        delimiter(),
        comment(),
        unknown(),
    ]
}

proptest! {
    #[test]
    fn scan_reproduces_rendered_token_stream(
        leading in "[ \t\n]{0,2}",
        pairs in vec((any_token(), "[ \t\n]{1,3}"), 0..32),
    ) {
        let mut source = leading;
        for ((_, lexeme), ws) in &pairs {
            source.push_str(lexeme);
            source.push_str(ws);
        }

        let mut scanner = Scanner::new(source.chars());
        for ((kind, lexeme), _) in &pairs {
            let token = scanner.next_token();
            prop_assert_eq!(token.kind, *kind);
            prop_assert_eq!(&token.lexeme, lexeme);
        }
        prop_assert!(scanner.next_token().is_end_of_stream());
        prop_assert!(scanner.next_token().is_end_of_stream());
    }

    #[test]
    fn scan_is_total_over_arbitrary_ascii(source in "[ -~\t\n]{0,200}") {
        // Whatever the input, the scan terminates and every lexeme except
        // the terminal token is non-empty.
        let tokens: Vec<_> = Scanner::new(source.chars()).collect();
        for token in &tokens {
            prop_assert!(!token.lexeme.is_empty());
        }
    }

    #[test]
    fn identifier_runs_never_split(word in "[a-zA-Z][a-zA-Z0-9]{0,40}") {
        let tokens: Vec<_> = Scanner::new(word.chars()).collect();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].lexeme, &word);
    }
}
