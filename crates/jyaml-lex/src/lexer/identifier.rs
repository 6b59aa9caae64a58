//! Bareword lexing: `null`, `true`, `false`.

use jyaml_util::{LexicalErrorKind, Position};

use super::core::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Scans an identifier run and resolves it to a keyword token. Anything
    /// outside `null`/`true`/`false` is an error — JYAML has no general
    /// bareword/unquoted-string type.
    pub(super) fn lex_identifier(
        &mut self,
        start: Position,
    ) -> Result<TokenKind, jyaml_util::LexicalError> {
        let start_offset = self.cursor.byte_offset();
        while matches!(self.cursor.current_char(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.cursor.advance();
        }
        let word = self.cursor.slice_from(start_offset);

        match word {
            "null" => Ok(TokenKind::Null),
            "true" => Ok(TokenKind::True),
            "false" => Ok(TokenKind::False),
            other => Err(self.err_at(
                LexicalErrorKind::UnknownIdentifier(other.to_string()),
                start,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LexerConfig;
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    fn lex_one(source: &str) -> Result<TokenKind, jyaml_util::LexicalError> {
        Ok(Lexer::new(source, LexerConfig::default())?
            .next()
            .unwrap()?
            .kind)
    }

    #[test]
    fn recognizes_keywords() {
        assert_eq!(lex_one("null").unwrap(), TokenKind::Null);
        assert_eq!(lex_one("true").unwrap(), TokenKind::True);
        assert_eq!(lex_one("false").unwrap(), TokenKind::False);
    }

    #[test]
    fn rejects_unknown_bareword() {
        let err = lex_one("nope").unwrap_err();
        assert_eq!(
            err.kind,
            jyaml_util::LexicalErrorKind::UnknownIdentifier("nope".to_string())
        );
    }
}
