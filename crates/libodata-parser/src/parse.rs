use crate::LiteralParseError;
use crate::json::json_value;
use crate::literal::primitive_literal;
use crate::recognizer::Recognizer;
use crate::token::ODataToken;

/// Runs `recognizer` at offset 0 and requires it to consume all of
/// `source`.
///
/// ```
/// use libodata_parser::literal::int32_value;
/// use libodata_parser::parse_complete;
/// use libodata_parser::LiteralParseError;
///
/// assert!(parse_complete(b"-42", int32_value).is_ok());
/// assert_eq!(
///     parse_complete(b"42 ", int32_value),
///     Err(LiteralParseError::TrailingInput { end: 2, len: 3 }),
/// );
/// ```
pub fn parse_complete(
    source: &[u8],
    recognizer: Recognizer,
) -> Result<ODataToken<'_>, LiteralParseError> {
    let token = recognizer(source, 0).ok_or(LiteralParseError::NoMatch { offset: 0 })?;
    if token.next() != source.len() {
        return Err(LiteralParseError::TrailingInput {
            end: token.next(),
            len: source.len(),
        });
    }
    Ok(token)
}

/// Parses `source` as exactly one `primitiveLiteral`.
pub fn parse_primitive_literal(source: &[u8]) -> Result<ODataToken<'_>, LiteralParseError> {
    parse_complete(source, primitive_literal)
}

/// Parses `source` as exactly one JSON value: an object, an array or a
/// JSON primitive.
pub fn parse_json_value(source: &[u8]) -> Result<ODataToken<'_>, LiteralParseError> {
    parse_complete(source, json_value)
}
