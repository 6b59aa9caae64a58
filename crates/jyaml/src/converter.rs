//! Projects a [`jyaml_par::Value`] tree into [`Native`] data, under a
//! [`LoadOptions`] bundle.
//!
//! A stateless function of `(&Value, &LoadOptions) -> Native`: hooks are
//! checked before the corresponding built-in conversion (`number_hook`
//! before `use_decimal`, `object_hook` before `use_ordered_dict`), and
//! `as_native_types` gates every `parse_*` flag at once.

use std::collections::HashMap;
use std::str::FromStr;

use indexmap::IndexMap;
use rust_decimal::Decimal;

use jyaml_par::Value;

use crate::native::Native;
use crate::options::{LoadOptions, NumberInput};

/// Converts a parsed [`Value`] tree into [`Native`] data under `options`.
///
/// Assumes `options` is already valid (see [`LoadOptions::validate`]) —
/// same assumption `jyaml_par::parse` makes about `ParseOptions`.
pub fn convert(value: &Value, options: &LoadOptions) -> Native {
    match value {
        Value::Null => {
            if options.parse_null && options.as_native_types {
                Native::Null
            } else {
                Native::String("null".to_string())
            }
        }
        Value::Bool(b) => {
            if options.parse_booleans && options.as_native_types {
                Native::Bool(*b)
            } else {
                Native::String(if *b { "true" } else { "false" }.to_string())
            }
        }
        Value::Int(n) => convert_number(NumberInput::Int(*n), lexeme_of_int(*n), options),
        Value::Float(f) => convert_number(NumberInput::Float(*f), f.to_string(), options),
        Value::String(s) => Native::String(s.clone()),
        Value::Array(items) => {
            Native::Array(items.iter().map(|item| convert(item, options)).collect())
        }
        Value::Object(map) => convert_object(map, options),
    }
}

fn lexeme_of_int(n: i64) -> String {
    n.to_string()
}

/// Shared number-conversion path for both `Value::Int` and `Value::Float`.
///
/// `as_string` is the value's string form, used both as the
/// `parse_numbers = false` fallback and as the source text
/// `use_decimal` re-parses — `Value` does not retain the original NUMBER
/// lexeme, so the float's shortest round-trip `Display` form stands in for
/// it (see DESIGN.md for why this is the faithful substitute rather than
/// converting the already-decoded `f64` through `Decimal::from_f64_retain`).
fn convert_number(input: NumberInput, as_string: String, options: &LoadOptions) -> Native {
    if !(options.parse_numbers && options.as_native_types) {
        return Native::String(as_string);
    }

    if let Some(hook) = &options.number_hook {
        return hook(input);
    }

    if let NumberInput::Float(_) = input {
        if options.use_decimal {
            return match Decimal::from_str(&as_string) {
                Ok(decimal) => Native::Decimal(decimal),
                // Beyond rust_decimal's ~7.9e28 range: fall back to the
                // plain float rather than panic on an out-of-spec magnitude.
                Err(_) => Native::Float(as_string.parse::<f64>().unwrap_or(0.0)),
            };
        }
    }

    match input {
        NumberInput::Int(n) => Native::Int(n),
        NumberInput::Float(f) => Native::Float(f),
    }
}

fn convert_object(map: &IndexMap<String, Value>, options: &LoadOptions) -> Native {
    let pairs: Vec<(String, Native)> = map
        .iter()
        .map(|(k, v)| (k.clone(), convert(v, options)))
        .collect();

    if let Some(hook) = &options.object_hook {
        return hook(pairs);
    }

    if options.use_ordered_dict {
        Native::Map(pairs.into_iter().collect::<IndexMap<_, _>>())
    } else {
        Native::HashMap(pairs.into_iter().collect::<HashMap<_, _>>())
    }
}
