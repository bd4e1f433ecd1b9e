//! Pushback character cursor.
//!
//! Maximal-munch scanning only discovers where a token ends by reading the
//! first character of whatever comes next, so the scanner regularly needs
//! to hand one character back. `Cursor` wraps any character iterator with a
//! single pending slot that is drained before the underlying source. The
//! source itself never has to be seekable.

use std::iter::Fuse;

/// A character source with a one-character pushback buffer.
///
/// At most one character can be pending at a time; that is all the scanner
/// ever needs, and the single slot keeps the unread discipline honest.
///
/// # Example
///
/// ```
/// use minipas_lex::Cursor;
///
/// let mut cursor = Cursor::new("ab".chars());
/// let first = cursor.read().unwrap();
/// assert_eq!(first, 'a');
/// cursor.unread(first);
/// assert_eq!(cursor.read(), Some('a'));
/// assert_eq!(cursor.read(), Some('b'));
/// assert_eq!(cursor.read(), None);
/// ```
pub struct Cursor<I: Iterator<Item = char>> {
    /// Underlying source, fused so reads past the end stay `None`.
    chars: Fuse<I>,

    /// The pushed-back character, if any.
    pending: Option<char>,
}

impl<I: Iterator<Item = char>> Cursor<I> {
    /// Creates a cursor over the given character source.
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.fuse(),
            pending: None,
        }
    }

    /// Returns the next character, draining the pushback slot first.
    ///
    /// Once the source is exhausted this keeps returning `None`.
    pub fn read(&mut self) -> Option<char> {
        self.pending.take().or_else(|| self.chars.next())
    }

    /// Returns one character to the front of the stream.
    ///
    /// The next [`read`](Cursor::read) yields `c` again. Only one character
    /// may be pending at a time.
    pub fn unread(&mut self, c: char) {
        debug_assert!(self.pending.is_none(), "pushback slot already occupied");
        self.pending = Some(c);
    }

    /// Reads the next character only if it satisfies `pred`.
    ///
    /// A non-matching character is pushed back, leaving the stream as it
    /// was.
    pub fn read_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        match self.read() {
            Some(c) if pred(c) => Some(c),
            Some(c) => {
                self.unread(c);
                None
            }
            None => None,
        }
    }

    /// Consumes the next character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        self.read_if(|c| c == expected).is_some()
    }

    /// Discards whitespace and returns the first significant character.
    ///
    /// Returns `None` if the source ends before one is found.
    pub fn read_nonspace(&mut self) -> Option<char> {
        loop {
            match self.read() {
                Some(c) if c.is_whitespace() => continue,
                other => return other,
            }
        }
    }
}
