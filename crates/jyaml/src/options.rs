//! Conversion-time configuration: how a [`crate::Value`] tree is lowered
//! into [`crate::Native`] data, plus the presets built on top of it.
//!
//! Mirrors `jyaml_par::ParseOptions`'s shape — a `Default` impl, named
//! presets, and a `validate()` gate invoked at construction rather than on
//! every `load` call.

use std::fmt;
use std::sync::Arc;

use jyaml_par::ParseOptions;

use crate::native::Native;

/// The decoded value handed to a [`NumberHook`], before any hook or
/// `use_decimal` conversion has been applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberInput {
    Int(i64),
    Float(f64),
}

/// Replaces the default object construction with a caller-supplied
/// transform over the already-converted `(key, value)` pairs.
pub type ObjectHook = Arc<dyn Fn(Vec<(String, Native)>) -> Native + Send + Sync>;

/// Replaces the default number conversion with a caller-supplied transform.
pub type NumberHook = Arc<dyn Fn(NumberInput) -> Native + Send + Sync>;

/// A violated consistency rule between two [`LoadOptions`] fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadOptionsError {
    #[error("use_decimal requires parse_numbers")]
    DecimalRequiresParseNumbers,
    #[error("{0} requires as_native_types")]
    NonStringOptionRequiresNativeTypes(&'static str),
}

/// Configuration governing how a parsed [`crate::Value`] tree is converted
/// into host-native data.
///
/// `object_hook` and `number_hook` are `Arc`-wrapped rather than boxed so
/// `LoadOptions` stays [`Clone`] — spec.md §5 allows independent option
/// instances to be used across concurrent calls without coordination, which
/// an owned `Box<dyn Fn>` would rule out.
#[derive(Clone)]
pub struct LoadOptions {
    /// Master switch: when `false`, every value is emitted as its string
    /// form regardless of the individual `parse_*` flags below.
    pub as_native_types: bool,
    /// Convert NUMBER lexemes to `Native::Int`/`Native::Float` (subject to
    /// `as_native_types`); otherwise numbers are emitted as their source
    /// lexeme string.
    pub parse_numbers: bool,
    /// Convert `true`/`false` to `Native::Bool`; otherwise emitted as the
    /// strings `"true"`/`"false"`.
    pub parse_booleans: bool,
    /// Convert `null` to `Native::Null`; otherwise emitted as the string
    /// `"null"`.
    pub parse_null: bool,
    /// Route floating values through `rust_decimal::Decimal` instead of
    /// `f64`. Requires `parse_numbers`.
    pub use_decimal: bool,
    /// Materialize objects as an insertion-ordered `Native::Map` instead of
    /// an unordered `Native::HashMap`.
    pub use_ordered_dict: bool,
    /// Whether the unordered-map path (`Native::HashMap`) is the one in
    /// play; Rust has no single `dict` type to toggle between, so this
    /// exists only for construction-time normalization (forced to `false`
    /// when `use_ordered_dict` is set) and has no further effect on
    /// conversion.
    pub use_map: bool,
    pub object_hook: Option<ObjectHook>,
    pub number_hook: Option<NumberHook>,
    /// Overrides the default [`ParseOptions`] used to produce the `Value`
    /// tree that gets converted. `None` uses `ParseOptions::default()`.
    pub parse_options: Option<ParseOptions>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("as_native_types", &self.as_native_types)
            .field("parse_numbers", &self.parse_numbers)
            .field("parse_booleans", &self.parse_booleans)
            .field("parse_null", &self.parse_null)
            .field("use_decimal", &self.use_decimal)
            .field("use_ordered_dict", &self.use_ordered_dict)
            .field("use_map", &self.use_map)
            .field("object_hook", &self.object_hook.is_some())
            .field("number_hook", &self.number_hook.is_some())
            .field("parse_options", &self.parse_options)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            as_native_types: true,
            parse_numbers: true,
            parse_booleans: true,
            parse_null: true,
            use_decimal: false,
            use_ordered_dict: false,
            use_map: true,
            object_hook: None,
            number_hook: None,
            parse_options: None,
        }
    }
}

impl LoadOptions {
    /// Checks the cross-field consistency rules.
    pub fn validate(&self) -> Result<(), LoadOptionsError> {
        if self.use_decimal && !self.parse_numbers {
            return Err(LoadOptionsError::DecimalRequiresParseNumbers);
        }
        if !self.as_native_types {
            if self.parse_numbers {
                return Err(LoadOptionsError::NonStringOptionRequiresNativeTypes(
                    "parse_numbers",
                ));
            }
            if self.parse_booleans {
                return Err(LoadOptionsError::NonStringOptionRequiresNativeTypes(
                    "parse_booleans",
                ));
            }
            if self.parse_null {
                return Err(LoadOptionsError::NonStringOptionRequiresNativeTypes(
                    "parse_null",
                ));
            }
            if self.use_decimal {
                return Err(LoadOptionsError::NonStringOptionRequiresNativeTypes(
                    "use_decimal",
                ));
            }
            if self.use_ordered_dict {
                return Err(LoadOptionsError::NonStringOptionRequiresNativeTypes(
                    "use_ordered_dict",
                ));
            }
        }
        Ok(())
    }

    /// `use_ordered_dict` and `use_map` both asking for a container kind is
    /// only meaningful one way; normalize so a hand-built `LoadOptions`
    /// behaves the same as a preset regardless of which flag the caller
    /// set.
    fn normalized(mut self) -> Self {
        if self.use_ordered_dict {
            self.use_map = false;
        }
        self
    }

    pub fn default_preset() -> Self {
        Self::default()
    }

    pub fn strict_types() -> Self {
        Self {
            as_native_types: true,
            parse_numbers: true,
            parse_booleans: true,
            parse_null: true,
            ..Self::default()
        }
        .normalized()
    }

    pub fn preserve_order() -> Self {
        Self {
            use_ordered_dict: true,
            ..Self::default()
        }
        .normalized()
    }

    pub fn high_precision() -> Self {
        Self {
            use_decimal: true,
            use_ordered_dict: true,
            ..Self::default()
        }
        .normalized()
    }

    pub fn strings_only() -> Self {
        Self {
            as_native_types: false,
            parse_numbers: false,
            parse_booleans: false,
            parse_null: false,
            ..Self::default()
        }
        .normalized()
    }
}
