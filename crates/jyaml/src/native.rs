//! The host-native data [`crate::convert`] projects a [`jyaml_par::Value`]
//! tree into, under a [`crate::LoadOptions`] bundle.

use std::collections::HashMap;

use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Host-native data produced by [`crate::convert`].
///
/// Unlike [`jyaml_par::Value`], which is a direct image of the grammar,
/// `Native` also has to represent the *string* forms that `LoadOptions` can
/// request in place of a parsed type (`parse_numbers = false` and friends),
/// the arbitrary-precision `Decimal` form requested by `use_decimal`, and
/// the unordered-vs-ordered map choice `use_ordered_dict` makes.
#[derive(Clone, Debug, PartialEq)]
pub enum Native {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Array(Vec<Native>),
    /// Insertion-ordered object, used when `use_ordered_dict` is set or an
    /// `object_hook` returns one directly.
    Map(IndexMap<String, Native>),
    /// Unordered object, the default container when neither
    /// `use_ordered_dict` nor `object_hook` applies.
    HashMap(HashMap<String, Native>),
}

impl Native {
    pub fn is_null(&self) -> bool {
        matches!(self, Native::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Native::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Native::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Native]> {
        match self {
            Native::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_ordered_map(&self) -> Option<&IndexMap<String, Native>> {
        match self {
            Native::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_hash_map(&self) -> Option<&HashMap<String, Native>> {
        match self {
            Native::HashMap(map) => Some(map),
            _ => None,
        }
    }
}
