//! Block constructs: dash-led sequences and bare `key: value` mappings.
//!
//! Neither form is delimited by a closing token; both run as long as the
//! next significant token keeps matching the construct's lead token. Column
//! alignment is not checked — see DESIGN.md for why a block's members are
//! recognized purely from the DASH/STRING/COLON token sequence rather than
//! from indentation.

use indexmap::IndexMap;
use jyaml_util::ParseError;

use super::core::Parser;
use crate::value::Value;

/// `block_array := (DASH NEWLINE* value NEWLINE*)+`
///
/// Callers only enter here after confirming [`Parser::at_dash`], so the
/// first iteration is guaranteed to find a `Dash`.
pub(super) fn parse_block_array(parser: &mut Parser) -> Result<Value, ParseError> {
    parser.skip_insignificant();
    parser.enter_container()?;

    let mut items = Vec::new();
    loop {
        parser.advance(); // '-'
        parser.skip_insignificant();
        items.push(parser.parse_value()?);
        parser.skip_insignificant();

        if !parser.at_dash() {
            break;
        }
    }

    parser.exit_container();
    Ok(Value::Array(items))
}

/// `block_object := (STRING ':' value NEWLINE*)+`
///
/// Callers only enter here after confirming [`Parser::at_block_object_pair`],
/// so the first iteration is guaranteed to find a `STRING ... COLON` pair.
pub(super) fn parse_block_object(parser: &mut Parser) -> Result<Value, ParseError> {
    parser.skip_insignificant();
    parser.enter_container()?;

    let mut map = IndexMap::new();
    loop {
        let (key, key_position) = parser.take_string_with_position()?;
        parser.skip_insignificant();
        parser.expect_colon()?;
        parser.skip_insignificant();
        let value = parser.parse_value()?;
        parser.insert_object_entry(&mut map, key, key_position, value)?;
        parser.skip_insignificant();

        if !parser.at_block_object_pair() {
            break;
        }
    }

    parser.exit_container();
    Ok(Value::Object(map))
}
