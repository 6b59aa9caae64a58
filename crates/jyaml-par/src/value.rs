//! The JYAML value tree and parsed-document wrapper.

use indexmap::IndexMap;

/// A JYAML value: the tagged sum the parser builds and the converter reads.
///
/// Integers and floats are split at construction (rather than carrying one
/// `Number` variant) so downstream code never has to re-derive "was this
/// originally an integer lexeme?" from a floating value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// Insertion-ordered; iteration order matches first appearance in source.
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

/// A single `#`-comment captured at `(line, column)` out-of-band from the
/// value tree.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentPosition {
    pub text: String,
    pub line: u32,
    pub column: u32,
}

/// The full result of a `parse` call: the value tree plus any comments that
/// were filtered out of the token stream along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedDocument {
    pub root: Value,
    pub comments: Vec<String>,
    /// Present only when `ParseOptions::include_comment_positions` was set.
    pub comment_positions: Option<Vec<CommentPosition>>,
}
