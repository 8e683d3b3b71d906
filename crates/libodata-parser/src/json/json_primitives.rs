//! JSON primitive values as they appear inside a URI: strings, numbers,
//! booleans and `null`.

use crate::lexer::byte_at;
use crate::lexer::byte_is;
use crate::lexer::escape;
use crate::lexer::exact;
use crate::lexer::is_digit;
use crate::lexer::is_hexdig;
use crate::lexer::is_non_ascii;
use crate::lexer::is_one_to_nine;
use crate::lexer::is_other_delim;
use crate::lexer::is_unreserved;
use crate::lexer::pct_encoded;
use crate::lexer::quotation_mark;
use crate::lexer::required;
use crate::recognizer::NamedRecognizer;
use crate::recognizer::first_match;
use crate::token::JsonPrimitive;
use crate::token::ODataToken;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use crate::token::source_text;
use crate::token::tokenize;

/// `qchar-unescaped = unreserved / pct-encoded-unescaped / other-delims
/// / ":" / "@" / "/" / "?" / "$" / "'" / "="`
///
/// `pct-encoded-unescaped` is every percent-encoding except `%22` and
/// `%5C`. Raw non-ASCII bytes are accepted as in `pchar`.
fn qchar_unescaped(source: &[u8], index: usize) -> Option<usize> {
    let byte = byte_at(source, index)?;
    if is_unreserved(byte)
        || is_other_delim(byte)
        || is_non_ascii(byte)
        || matches!(byte, b':' | b'@' | b'/' | b'?' | b'$' | b'\'' | b'=')
    {
        return Some(index + 1);
    }
    match pct_encoded(source, index)? {
        (b'"' | b'\\', _) => None,
        (_, next) => Some(next),
    }
}

/// `qchar-JSON-special = SP / ":" / "{" / "}" / "[" / "]"`
fn qchar_json_special(source: &[u8], index: usize) -> Option<usize> {
    matches!(byte_at(source, index)?, b' ' | b':' | b'{' | b'}' | b'[' | b']').then_some(index + 1)
}

/// The character after an `escape` in a JSON string.
fn escaped_char(source: &[u8], index: usize) -> Option<usize> {
    if let Some(next) = quotation_mark(source, index).or_else(|| escape(source, index)) {
        return Some(next);
    }
    match byte_at(source, index)? {
        b'/' | b'b' | b'f' | b'n' | b'r' | b't' => Some(index + 1),
        b'u' => required(source, index + 1, is_hexdig, 4, Some(4)),
        _ => exact(source, index, "%2F").or_else(|| exact(source, index, "%2f")),
    }
}

/// `charInJSON = qchar-unescaped / qchar-JSON-special / escape ( ... )`
///
/// Returns the offset after one character form: a single byte, a
/// percent-encoding or an escape sequence.
pub fn char_in_json(source: &[u8], index: usize) -> Option<usize> {
    qchar_unescaped(source, index)
        .or_else(|| qchar_json_special(source, index))
        .or_else(|| escaped_char(source, escape(source, index)?))
}

/// `stringInJSON = quotation-mark *charInJSON quotation-mark`
///
/// The value is the raw text between the quotation marks; escapes are
/// not decoded. Raw bytes that do not form valid UTF-8 are no match.
pub fn string_in_json(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let text_start = quotation_mark(source, index)?;
    let mut cursor = text_start;
    while let Some(next) = char_in_json(source, cursor) {
        cursor = next;
    }
    let end = quotation_mark(source, cursor)?;
    Some(json_literal(
        source,
        index,
        end,
        JsonPrimitive::String(source_text(source, text_start, cursor)?),
    ))
}

/// `int = "0" / ( oneToNine *DIGIT )`
fn json_int(source: &[u8], index: usize) -> Option<usize> {
    match byte_at(source, index)? {
        b'0' => Some(index + 1),
        byte if is_one_to_nine(byte) => required(source, index + 1, is_digit, 0, None),
        _ => None,
    }
}

/// `numberInJSON = [ "-" ] int [ frac ] [ exp ]`
///
/// `frac = "." 1*DIGIT` and `exp = "e" [ "-" / "+" ] 1*DIGIT` (either
/// case of `e`). An incomplete fraction or exponent is left unconsumed.
pub fn number_in_json(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let mut cursor = index;
    if byte_at(source, cursor) == Some(b'-') {
        cursor += 1;
    }
    cursor = json_int(source, cursor)?;

    if byte_at(source, cursor) == Some(b'.') {
        if let Some(next) = required(source, cursor + 1, is_digit, 1, None) {
            cursor = next;
        }
    }

    if matches!(byte_at(source, cursor), Some(b'e' | b'E')) {
        let mut digits_start = cursor + 1;
        if matches!(byte_at(source, digits_start), Some(b'-' | b'+')) {
            digits_start += 1;
        }
        if byte_is(source, digits_start, is_digit) {
            cursor = required(source, digits_start, is_digit, 1, None)?;
        }
    }

    let number = std::str::from_utf8(&source[index..cursor])
        .ok()?
        .parse::<f64>()
        .ok()?;
    Some(json_literal(source, index, cursor, JsonPrimitive::Number(number)))
}

/// `'true' / 'false'`
pub fn boolean_in_json(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    if let Some(next) = exact(source, index, "true") {
        return Some(json_literal(source, index, next, JsonPrimitive::Boolean(true)));
    }
    let next = exact(source, index, "false")?;
    Some(json_literal(source, index, next, JsonPrimitive::Boolean(false)))
}

/// `'null'`
pub fn null_in_json(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let next = exact(source, index, "null")?;
    Some(json_literal(source, index, next, JsonPrimitive::Null))
}

/// The alternatives of `primitiveLiteralInJSON`, in evaluation order.
pub const PRIMITIVE_LITERAL_IN_JSON_ALTERNATIVES: &[NamedRecognizer] = &[
    NamedRecognizer::new("stringInJSON", string_in_json),
    NamedRecognizer::new("numberInJSON", number_in_json),
    NamedRecognizer::new("booleanInJSON", boolean_in_json),
    NamedRecognizer::new("nullInJSON", null_in_json),
];

/// `primitiveLiteralInJSON = stringInJSON / numberInJSON / 'true' /
/// 'false' / 'null'`
pub fn primitive_literal_in_json(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    first_match(source, index, PRIMITIVE_LITERAL_IN_JSON_ALTERNATIVES)
}

fn json_literal<'src>(
    source: &[u8],
    start: usize,
    next: usize,
    value: JsonPrimitive<'src>,
) -> ODataToken<'src> {
    tokenize(source, start, next, ODataTokenValue::Json(value), ODataTokenKind::Literal)
}
