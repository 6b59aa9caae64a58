//! Token types produced by the JYAML lexer.

use std::fmt;

use jyaml_util::Position;

/// The kind of lexeme a [`Token`] represents.
///
/// `String` and `Number` carry the STRING token's *decoded* value and the
/// NUMBER token's *verbatim* lexeme respectively — numeric decoding happens
/// in the parser (spec §4.2), not here.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Null,
    True,
    False,
    /// Verbatim JSON-number lexeme; decoded by the parser.
    Number(String),
    /// Already-decoded string value (quoted or multiline scalar).
    String(String),
    Colon,
    Comma,
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    /// `-` used as a block-sequence marker.
    Dash,
    Newline,
    /// A line-leading run of spaces; carries the count.
    Indent(usize),
    /// Comment payload with the leading `#` removed and whitespace trimmed.
    Comment(String),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Null => write!(f, "null"),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Number(lexeme) => write!(f, "{lexeme}"),
            TokenKind::String(_) => write!(f, "string"),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::LBrack => write!(f, "["),
            TokenKind::RBrack => write!(f, "]"),
            TokenKind::Dash => write!(f, "-"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Indent(n) => write!(f, "indent({n})"),
            TokenKind::Comment(_) => write!(f, "comment"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// A single lexical token: its kind plus the position of its first
/// character. `line` and `column` are always `>= 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            line: position.line,
            column: position.column,
        }
    }

    /// The token's position, for error reporting.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// `true` for the synthetic end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
