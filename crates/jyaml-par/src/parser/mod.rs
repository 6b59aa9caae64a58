//! Parser module, split the way the lexer is: a `core` module holding the
//! `Parser` struct and token-stream plumbing, plus one module per grammar
//! area.
//! - `core` — `Parser` struct, lookahead helpers, document entry point
//! - `value` — top-level value dispatch (the grammar's `value` production)
//! - `flow` — `[...]` and `{...}` containers
//! - `block` — `- item` sequences and bare `key: value` mappings
//! - `numeric` — NUMBER lexeme decoding into `Value::Int`/`Value::Float`

mod block;
mod core;
mod flow;
mod numeric;
mod value;

pub use core::Parser;
