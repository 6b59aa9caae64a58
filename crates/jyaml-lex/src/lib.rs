//! Lexer for the JYAML data-interchange format.
//!
//! Turns source text into a stream of [`Token`]s. Indentation is surfaced
//! as explicit `Indent` tokens rather than being folded away here — the
//! parser in `jyaml-par` is the layer that understands block structure.

pub mod config;
pub mod cursor;
mod lexer;
pub mod token;

pub use config::LexerConfig;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenizes `source` in full, collecting every token (including the
/// trailing `Eof`) or the first lexical error encountered.
///
/// A convenience wrapper around constructing a [`Lexer`] and draining it;
/// most callers building an actual parser will want to drive the iterator
/// themselves instead.
pub fn tokenize(source: &str, config: LexerConfig) -> Result<Vec<Token>, jyaml_util::LexicalError> {
    Lexer::new(source, config)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_collects_full_stream() {
        let tokens = tokenize("{\"a\": 1}", LexerConfig::default()).unwrap();
        assert!(tokens.last().unwrap().is_eof());
    }
}
