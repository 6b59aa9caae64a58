//! Parser and value model for the JYAML data-interchange format.
//!
//! `jyaml-lex` turns source text into tokens; this crate turns tokens into a
//! [`Value`] tree, plus the [`ParseOptions`] bundle that governs how strict
//! that process is.

mod options;
mod parser;
mod value;

pub use jyaml_lex::{Token, TokenKind};
pub use jyaml_util::{JyamlError, LexicalError, LexicalErrorKind, ParseError, ParseErrorKind, Position};
pub use options::{LineEndingPolicy, OverflowPolicy, ParseOptions, ParseOptionsError};
pub use parser::Parser;
pub use value::{CommentPosition, ParsedDocument, Value};

/// Parses a complete JYAML document from `source`.
///
/// `options` is assumed already valid — every preset in this crate is valid
/// by construction, and a caller building one by hand is expected to call
/// [`ParseOptions::validate`] once, at construction, rather than have every
/// `parse` call re-check it.
///
/// Normalizes line endings first if configured, then runs the lexer and
/// hands the resulting token stream to [`Parser`].
pub fn parse(source: &str, options: &ParseOptions) -> Result<ParsedDocument, JyamlError> {
    let normalized;
    let source = match options.normalize_line_endings {
        LineEndingPolicy::None => source,
        LineEndingPolicy::Lf | LineEndingPolicy::Crlf => {
            normalized = source.replace("\r\n", "\n").replace('\r', "\n");
            &normalized
        }
    };

    let lexer_config = jyaml_lex::LexerConfig {
        allow_tab_whitespace_extension: options.allow_tab_whitespace_extension,
        allow_keep_chomping_extension: !options.strict_mode,
    };

    let tokens = jyaml_lex::tokenize(source, lexer_config)?;
    let doc = Parser::new(tokens, options.clone()).parse_document()?;
    Ok(doc)
}
