//! Flow containers: `[...]` arrays and `{...}` objects.
//!
//! Both forms tolerate a trailing comma and ignore newlines anywhere inside
//! the brackets; `flow_object` additionally tolerates a newline standing in
//! for the comma between two pairs.

use indexmap::IndexMap;
use jyaml_lex::TokenKind;
use jyaml_util::{ParseError, ParseErrorKind};

use super::core::Parser;
use crate::value::Value;

/// `flow_array := '[' NEWLINE* (value (',' NEWLINE* value)* ','? NEWLINE*)? ']'`
pub(super) fn parse_flow_array(parser: &mut Parser) -> Result<Value, ParseError> {
    parser.enter_container()?;
    parser.advance(); // '['
    parser.skip_insignificant();

    let mut items = Vec::new();

    if matches!(parser.current(), TokenKind::RBrack) {
        parser.advance();
        parser.exit_container();
        return Ok(Value::Array(items));
    }

    loop {
        items.push(parser.parse_value()?);
        parser.skip_insignificant();

        match parser.current() {
            TokenKind::Comma => {
                parser.advance();
                parser.skip_insignificant();
                if matches!(parser.current(), TokenKind::RBrack) {
                    break;
                }
            }
            TokenKind::RBrack => break,
            _ => return Err(parser.err(ParseErrorKind::ExpectedCommaOrClose)),
        }
    }

    parser.advance(); // ']'
    parser.exit_container();
    Ok(Value::Array(items))
}

/// `flow_object := '{' NEWLINE* (pair ((',' | NEWLINE+) NEWLINE* pair)*)? ','? NEWLINE* '}'`
/// where `pair := STRING NEWLINE* ':' NEWLINE* value`.
pub(super) fn parse_flow_object(parser: &mut Parser) -> Result<Value, ParseError> {
    parser.enter_container()?;
    parser.advance(); // '{'
    parser.skip_insignificant();

    let mut map = IndexMap::new();

    if matches!(parser.current(), TokenKind::RBrace) {
        parser.advance();
        parser.exit_container();
        return Ok(Value::Object(map));
    }

    loop {
        parse_pair(parser, &mut map)?;
        parser.skip_insignificant();

        match parser.current() {
            TokenKind::Comma => {
                parser.advance();
                parser.skip_insignificant();
                if matches!(parser.current(), TokenKind::RBrace) {
                    break;
                }
            }
            TokenKind::RBrace => break,
            // A newline already consumed by skip_insignificant can stand in
            // for the comma, as long as another pair actually follows.
            _ if parser.at_block_object_pair() => continue,
            _ => return Err(parser.err(ParseErrorKind::ExpectedCommaOrClose)),
        }
    }

    parser.advance(); // '}'
    parser.exit_container();
    Ok(Value::Object(map))
}

fn parse_pair(parser: &mut Parser, map: &mut IndexMap<String, Value>) -> Result<(), ParseError> {
    let (key, key_position) = parser.take_string_with_position()?;
    parser.skip_insignificant();
    parser.expect_colon()?;
    parser.skip_insignificant();
    let value = parser.parse_value()?;
    parser.insert_object_entry(map, key, key_position, value)
}
