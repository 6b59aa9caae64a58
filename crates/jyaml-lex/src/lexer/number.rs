//! Number lexeme scanning. Decoding into `i64`/`f64` happens in the parser;
//! this module only validates and slices the verbatim lexeme.

use jyaml_util::LexicalErrorKind;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a JSON-grammar number lexeme starting at the cursor's current
    /// position (which is either `-` or an ASCII digit).
    pub(super) fn lex_number(&mut self) -> Result<String, jyaml_util::LexicalError> {
        let start = self.cursor.byte_offset();

        if self.cursor.current_char() == Some('-') {
            self.cursor.advance();
        }

        match self.cursor.current_char() {
            Some('0') => {
                self.cursor.advance();
                if matches!(self.cursor.current_char(), Some(c) if c.is_ascii_digit()) {
                    return Err(self.err(LexicalErrorKind::InvalidNumber));
                }
            }
            Some(c) if c.is_ascii_digit() => {
                self.consume_digits();
            }
            _ => return Err(self.err(LexicalErrorKind::InvalidNumber)),
        }

        if self.cursor.current_char() == Some('.') {
            self.cursor.advance();
            if !matches!(self.cursor.current_char(), Some(c) if c.is_ascii_digit()) {
                return Err(self.err(LexicalErrorKind::InvalidNumber));
            }
            self.consume_digits();
        }

        if matches!(self.cursor.current_char(), Some('e') | Some('E')) {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), Some('+') | Some('-')) {
                self.cursor.advance();
            }
            if !matches!(self.cursor.current_char(), Some(c) if c.is_ascii_digit()) {
                return Err(self.err(LexicalErrorKind::InvalidNumber));
            }
            self.consume_digits();
        }

        Ok(self.cursor.slice_from(start).to_string())
    }

    fn consume_digits(&mut self) {
        while matches!(self.cursor.current_char(), Some(c) if c.is_ascii_digit()) {
            self.cursor.advance();
        }
    }
}
