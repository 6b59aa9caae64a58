//! Shared position and error types used by the JYAML lexer and parser.
//!
//! This crate has no behavior of its own; it exists so `jyaml-lex` and
//! `jyaml-par` can agree on how a source location and a failure are
//! represented without either crate depending on the other.

mod error;
mod position;

pub use error::{JyamlError, LexicalError, LexicalErrorKind, ParseError, ParseErrorKind};
pub use position::Position;
