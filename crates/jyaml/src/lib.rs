//! JYAML: JSON-YAML Adaptive Markup Language.
//!
//! Unifies JSON's strict grammar with two YAML conveniences — line comments
//! and indentation-anchored multiline strings (`|`/`>`). This crate is the
//! public facade over `jyaml-lex` and `jyaml-par`: it owns [`LoadOptions`]
//! and the [`Native`] value [`convert`]s a parsed document into, and
//! re-exports everything else a consumer needs so `use jyaml::*` is the
//! only import most callers write.
//!
//! ```
//! let data = jyaml::load_strict(r#"{"name": "example", "port": 8080}"#).unwrap();
//! let map = data.as_hash_map().unwrap();
//! assert_eq!(map["port"], jyaml::Native::Int(8080));
//! ```

mod converter;
mod native;
mod options;

pub use jyaml_par::{
    parse, CommentPosition, JyamlError, LexicalError, LexicalErrorKind, LineEndingPolicy,
    OverflowPolicy, ParseError, ParseErrorKind, ParseOptions, ParseOptionsError, ParsedDocument,
    Position, Value,
};

pub use converter::convert;
pub use native::Native;
pub use options::{LoadOptions, LoadOptionsError, NumberHook, NumberInput, ObjectHook};

/// Parses `text` and converts the result under `options` in one step.
///
/// `options.parse_options` (or `ParseOptions::default()` when absent)
/// governs the parse; `options` itself governs the conversion.
pub fn load(text: &str, options: &LoadOptions) -> Result<Native, JyamlError> {
    let parse_options = options.parse_options.clone().unwrap_or_default();
    let document = parse(text, &parse_options)?;
    Ok(convert(&document.root, options))
}

/// Alias for [`load`], for callers who prefer the `loads` spelling.
pub fn loads(text: &str, options: &LoadOptions) -> Result<Native, JyamlError> {
    load(text, options)
}

/// `load` under [`LoadOptions::strict_types`].
pub fn load_strict(text: &str) -> Result<Native, JyamlError> {
    load(text, &LoadOptions::strict_types())
}

/// `load` under [`ParseOptions::permissive`], with default conversion.
pub fn load_permissive(text: &str) -> Result<Native, JyamlError> {
    let options = LoadOptions {
        parse_options: Some(ParseOptions::permissive()),
        ..LoadOptions::default()
    };
    load(text, &options)
}

/// `load` under [`ParseOptions::fast`], with default conversion.
pub fn load_fast(text: &str) -> Result<Native, JyamlError> {
    let options = LoadOptions {
        parse_options: Some(ParseOptions::fast()),
        ..LoadOptions::default()
    };
    load(text, &options)
}

/// `load` under [`LoadOptions::preserve_order`].
pub fn load_ordered(text: &str) -> Result<Native, JyamlError> {
    load(text, &LoadOptions::preserve_order())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_strict_produces_native_types() {
        let native = load_strict(r#"{"a": 1, "b": true, "c": null}"#).unwrap();
        let map = native.as_hash_map().unwrap();
        assert_eq!(map["a"], Native::Int(1));
        assert_eq!(map["b"], Native::Bool(true));
        assert_eq!(map["c"], Native::Null);
    }

    #[test]
    fn load_ordered_preserves_key_order() {
        let native = load_ordered("z: 1\na: 2\n").unwrap();
        let map = native.as_ordered_map().unwrap();
        assert_eq!(map.get_index(0).unwrap().0, "z");
        assert_eq!(map.get_index(1).unwrap().0, "a");
    }

    #[test]
    fn load_permissive_allows_duplicate_keys() {
        let native = load_permissive(r#"{"a": 1, "a": 2}"#).unwrap();
        let map = native.as_hash_map().unwrap();
        assert_eq!(map["a"], Native::Int(2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn load_fast_still_parses_correctly_with_comments_dropped() {
        let native = load_fast("# dropped\na: 1\n").unwrap();
        let map = native.as_hash_map().unwrap();
        assert_eq!(map["a"], Native::Int(1));
    }

    #[test]
    fn strict_mode_duplicate_key_is_an_error() {
        let err = load(r#"{"a": 1, "a": 2}"#, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, JyamlError::Parse(_)));
    }

    #[test]
    fn loads_is_an_alias_for_load() {
        let options = LoadOptions::default();
        assert_eq!(
            loads("1", &options).unwrap(),
            load("1", &options).unwrap()
        );
    }
}
