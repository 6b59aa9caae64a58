//! NUMBER lexeme decoding: integer vs. floating, with the configured
//! overflow policy applied to integer lexemes too wide for `i64`.

use jyaml_util::{ParseError, ParseErrorKind, Position};

use crate::options::OverflowPolicy;
use crate::value::Value;

/// Decodes a verbatim NUMBER lexeme (already validated by the lexer) into
/// `Value::Int` or `Value::Float`.
///
/// A lexeme with no `.` and no `e`/`E` is an integer candidate; everything
/// else is a float. An integer lexeme that overflows `i64` is widened to a
/// float under [`OverflowPolicy::Widen`], or rejected under
/// [`OverflowPolicy::Error`].
pub(super) fn decode_number(
    lexeme: &str,
    position: Position,
    overflow_policy: OverflowPolicy,
) -> Result<Value, ParseError> {
    let is_float = lexeme.contains(['.', 'e', 'E']);

    if !is_float {
        match lexeme.parse::<i64>() {
            Ok(n) => return Ok(Value::Int(n)),
            Err(_) => match overflow_policy {
                OverflowPolicy::Error => {
                    return Err(ParseError::at(ParseErrorKind::Overflow, position))
                }
                OverflowPolicy::Widen => {
                    // Fall through to float parsing below.
                }
            },
        }
    }

    lexeme
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| ParseError::at(ParseErrorKind::UnexpectedToken(lexeme.to_string()), position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyaml_util::Position;

    fn decode(lexeme: &str, policy: OverflowPolicy) -> Result<Value, ParseError> {
        decode_number(lexeme, Position::start(), policy)
    }

    #[test]
    fn plain_integer() {
        assert_eq!(decode("42", OverflowPolicy::Widen).unwrap(), Value::Int(42));
    }

    #[test]
    fn negative_integer() {
        assert_eq!(
            decode("-42", OverflowPolicy::Widen).unwrap(),
            Value::Int(-42)
        );
    }

    #[test]
    fn fraction_is_float() {
        assert_eq!(
            decode("3.14", OverflowPolicy::Widen).unwrap(),
            Value::Float(3.14)
        );
    }

    #[test]
    fn exponent_is_float() {
        assert_eq!(
            decode("1e3", OverflowPolicy::Widen).unwrap(),
            Value::Float(1000.0)
        );
    }

    #[test]
    fn overflowing_integer_widens_by_default() {
        let huge = "99999999999999999999";
        assert_eq!(
            decode(huge, OverflowPolicy::Widen).unwrap(),
            Value::Float(huge.parse::<f64>().unwrap())
        );
    }

    #[test]
    fn overflowing_integer_errors_when_configured() {
        let err = decode("99999999999999999999", OverflowPolicy::Error).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Overflow);
    }
}
