//! Character cursor for traversing JYAML source text.
//!
//! Maintains position state while iterating through source characters. It
//! handles UTF-8 encoding correctly and tracks 1-based line/column
//! information for error reporting, matching [`jyaml_util::Position`].

use jyaml_util::Position;

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use jyaml_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current_char(), Some('a'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('b'));
/// ```
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor, or
    /// `None` if that is past the end of input.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        if offset == 0 {
            self.source[self.position..].chars().next()
        } else {
            self.source[self.position..].chars().nth(offset)
        }
    }

    /// Advances past the current character, updating line/column tracking.
    /// Does nothing at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Returns `true` if the cursor has consumed all of `source`.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// The current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The current position as a [`Position`].
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The current byte offset into `source`.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.position
    }

    /// The source slice from byte offset `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Captures the cursor's state so it can be [`restore`](Self::restore)d
    /// later. Used by the multiline-scalar scanner to rewind to the start of
    /// a line that turned out not to belong to the scalar.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores a previously captured snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// An opaque, restorable cursor state.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}
