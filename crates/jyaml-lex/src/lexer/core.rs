//! Core lexer implementation: dispatch, whitespace, indentation, comments.

use jyaml_util::{LexicalError, LexicalErrorKind, Position};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Transduces JYAML source text into a token stream.
///
/// `Lexer` implements [`Iterator`], yielding `Ok(Token)` for each lexeme and
/// stopping (returning `None`) after it has produced the synthetic `Eof`
/// token or after the first error.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) config: LexerConfig,
    at_line_start: bool,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for `source`. Fails immediately if `source` begins
    /// with a byte-order mark.
    pub fn new(source: &'a str, config: LexerConfig) -> Result<Self, LexicalError> {
        if source.starts_with('\u{feff}') {
            return Err(LexicalError::without_position(LexicalErrorKind::BomForbidden));
        }
        Ok(Self {
            cursor: Cursor::new(source),
            config,
            at_line_start: true,
            done: false,
        })
    }

    pub(super) fn err(&self, kind: LexicalErrorKind) -> LexicalError {
        LexicalError::at(kind, self.cursor.position())
    }

    pub(super) fn err_at(&self, kind: LexicalErrorKind, position: Position) -> LexicalError {
        LexicalError::at(kind, position)
    }

    /// Counts a line-leading run of spaces. A tab anywhere in this run is
    /// always an error, regardless of configuration.
    fn count_indent(&mut self) -> Result<usize, LexicalError> {
        let mut indent = 0;
        loop {
            match self.cursor.current_char() {
                Some(' ') => {
                    self.cursor.advance();
                    indent += 1;
                }
                Some('\t') => return Err(self.err(LexicalErrorKind::TabForbidden)),
                _ => return Ok(indent),
            }
        }
    }

    /// Skips inter-token whitespace (spaces always; tabs only when the
    /// extension is enabled). Does not skip newlines or comments — those
    /// are tokens in their own right.
    fn skip_inter_token_whitespace(&mut self) -> Result<(), LexicalError> {
        loop {
            match self.cursor.current_char() {
                Some(' ') => {
                    self.cursor.advance();
                }
                Some('\t') if self.config.allow_tab_whitespace_extension => {
                    self.cursor.advance();
                }
                Some('\t') => return Err(self.err(LexicalErrorKind::TabForbidden)),
                _ => return Ok(()),
            }
        }
    }

    /// Returns the next token, or the synthetic EOF token once input is
    /// exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        if self.at_line_start {
            self.at_line_start = false;
            let start = self.cursor.position();
            let indent = self.count_indent()?;
            if indent > 0 {
                return Ok(Token::new(TokenKind::Indent(indent), start));
            }
        }

        self.skip_inter_token_whitespace()?;

        let start = self.cursor.position();

        let Some(c) = self.cursor.current_char() else {
            return Ok(Token::new(TokenKind::Eof, start));
        };

        match c {
            '\r' => Err(self.err(LexicalErrorKind::UnexpectedChar('\r'))),
            '\n' => {
                self.cursor.advance();
                self.at_line_start = true;
                Ok(Token::new(TokenKind::Newline, start))
            }
            '#' => {
                let comment = self.read_comment();
                Ok(Token::new(TokenKind::Comment(comment), start))
            }
            '"' | '\'' => {
                let value = self.lex_string(c)?;
                Ok(Token::new(TokenKind::String(value), start))
            }
            '|' | '>' => {
                let value = self.lex_multiline(c)?;
                // `lex_multiline` always leaves the cursor at the start of a
                // fresh line (end of input, a dedent, or a trailing blank).
                self.at_line_start = true;
                Ok(Token::new(TokenKind::String(value), start))
            }
            ':' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::Colon, start))
            }
            ',' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::Comma, start))
            }
            '[' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::LBrack, start))
            }
            ']' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::RBrack, start))
            }
            '{' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::LBrace, start))
            }
            '}' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::RBrace, start))
            }
            '-' if self.cursor.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                let lexeme = self.lex_number()?;
                Ok(Token::new(TokenKind::Number(lexeme), start))
            }
            '-' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::Dash, start))
            }
            c if c.is_ascii_digit() => {
                let lexeme = self.lex_number()?;
                Ok(Token::new(TokenKind::Number(lexeme), start))
            }
            c if c.is_alphabetic() => {
                let kind = self.lex_identifier(start)?;
                Ok(Token::new(kind, start))
            }
            c => {
                self.cursor.advance();
                Err(self.err_at(LexicalErrorKind::UnexpectedChar(c), start))
            }
        }
    }

    /// Reads a `#` comment to end of line. The payload has the `#` removed
    /// and surrounding whitespace trimmed.
    fn read_comment(&mut self) -> String {
        self.cursor.advance(); // '#'
        let start = self.cursor.byte_offset();
        while let Some(c) = self.cursor.current_char() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
        }
        self.cursor.slice_from(start).trim().to_string()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) => {
                if token.is_eof() {
                    self.done = true;
                }
                Some(Ok(token))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
