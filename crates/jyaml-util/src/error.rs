//! Error types raised by the JYAML lexer and parser.
//!
//! Every failure carries an error *kind* (one distinct, introspectable
//! variant per failure mode) plus an optional [`Position`]. The
//! position is omitted only when no token was available to anchor it to
//! (for example, an empty input at the parser's `Unexpected end of input`).

use std::fmt;

use crate::position::Position;

/// Errors raised while transducing source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalErrorKind {
    /// A byte-order mark was found at the start of input.
    #[error("byte order mark is not allowed")]
    BomForbidden,
    /// A tab character appeared in indentation, or in inter-token whitespace
    /// without the tab extension enabled.
    #[error("tab character in indentation")]
    TabForbidden,
    /// A quoted string was not closed before end of line or end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// An escape sequence other than the recognized set was used.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// A `\\uXXXX` escape did not have exactly four hex digits.
    #[error("invalid unicode escape sequence")]
    InvalidUnicodeEscape,
    /// A low surrogate appeared without a preceding high surrogate, or a
    /// high surrogate was not immediately followed by a matching low one.
    #[error("unpaired surrogate U+{0:04X}")]
    UnpairedSurrogate(u32),
    /// A NUMBER lexeme did not match the JSON number grammar.
    #[error("invalid number literal")]
    InvalidNumber,
    /// An identifier other than `null`, `true`, `false` was scanned.
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    /// A character did not begin any recognized token.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

/// A lexical error with its source position, when one is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub position: Option<Position>,
}

impl LexicalError {
    /// Builds an error anchored at `position`.
    pub fn at(kind: LexicalErrorKind, position: Position) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    /// Builds an error with no anchoring position (only used for the BOM
    /// check, which fails before any token has been identified).
    pub fn without_position(kind: LexicalErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at {}", self.kind, pos),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for LexicalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Errors raised while recognizing the JYAML grammar from a token stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A token was encountered that is not valid at this point in the
    /// grammar.
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    /// The token stream ended while a construct was still open.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A `:` was required but not found after an object key.
    #[error("expected ':'")]
    ExpectedColon,
    /// Neither `,` nor the container's closing bracket/brace was found.
    #[error("expected ',' or closing bracket")]
    ExpectedCommaOrClose,
    /// A `|`/`>` indicator was reached as a value in a position the lexer
    /// should already have consumed it from (defensive — the lexer always
    /// turns these into STRING tokens).
    #[error("misused multiline string indicator")]
    MultilineIndicatorMisuse,
    /// Nesting exceeded the configured `max_depth`.
    #[error("maximum nesting depth exceeded: {0}")]
    DepthExceeded(usize),
    /// An object key repeated a prior key while `strict_mode` is on.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    /// Tokens remained after a complete root value was parsed.
    #[error("trailing content after document")]
    TrailingContent,
    /// An integer literal did not fit the host's widest integer type and
    /// `OverflowPolicy::Error` was configured.
    #[error("integer literal overflows i64")]
    Overflow,
}

/// A parse error with its source position, when one is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Option<Position>,
}

impl ParseError {
    /// Builds an error anchored at `position`.
    pub fn at(kind: ParseErrorKind, position: Position) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    /// Builds an error with no anchoring position (used when the token
    /// stream is exhausted and there is no token left to point at).
    pub fn without_position(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at {}", self.kind, pos),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<LexicalError> for ParseError {
    /// Lexer errors arising from the pre-tokenization pass are rewrapped
    /// under the parser's error category so callers can catch a single
    /// type uniformly (spec §7, "Propagation policy").
    fn from(err: LexicalError) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken(err.kind.to_string()),
            position: err.position,
        }
    }
}

/// The union of everything that can fail a `parse`/`load` call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JyamlError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_position() {
        let err = LexicalError::at(LexicalErrorKind::BomForbidden, Position::new(1, 1));
        assert_eq!(
            err.to_string(),
            "byte order mark is not allowed at line 1, column 1"
        );
    }

    #[test]
    fn displays_without_position() {
        let err = ParseError::without_position(ParseErrorKind::UnexpectedEof);
        assert_eq!(err.to_string(), "unexpected end of input");
    }

    #[test]
    fn lexical_error_rewraps_into_parse_error() {
        let lex_err = LexicalError::at(LexicalErrorKind::TabForbidden, Position::new(2, 3));
        let parse_err: ParseError = lex_err.into();
        assert_eq!(parse_err.position, Some(Position::new(2, 3)));
    }
}
