//! Top-level value dispatch: the grammar's `value` production.

use jyaml_lex::TokenKind;
use jyaml_util::ParseErrorKind;

use super::core::Parser;
use crate::value::Value;
use jyaml_util::ParseError;

/// Parses one `value`, dispatching on the current token.
///
/// A leading `STRING` is ambiguous between a plain string value and the key
/// of a block-object pair; the two-token lookahead in
/// [`Parser::at_block_object_pair`] resolves it.
pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, ParseError> {
    parser.skip_insignificant();

    if parser.at_block_object_pair() {
        return super::block::parse_block_object(parser);
    }
    if parser.at_dash() {
        return super::block::parse_block_array(parser);
    }

    match parser.current().clone() {
        TokenKind::Null => {
            parser.advance();
            Ok(Value::Null)
        }
        TokenKind::True => {
            parser.advance();
            Ok(Value::Bool(true))
        }
        TokenKind::False => {
            parser.advance();
            Ok(Value::Bool(false))
        }
        TokenKind::Number(lexeme) => {
            let position = parser.current_position();
            parser.advance();
            super::numeric::decode_number(&lexeme, position, parser.options.overflow_policy)
        }
        TokenKind::String(s) => {
            parser.advance();
            Ok(Value::String(s))
        }
        TokenKind::LBrack => super::flow::parse_flow_array(parser),
        TokenKind::LBrace => super::flow::parse_flow_object(parser),
        TokenKind::Eof => Err(parser.err(ParseErrorKind::UnexpectedEof)),
        other => Err(parser.err(ParseErrorKind::UnexpectedToken(other.to_string()))),
    }
}
