use crate::json::PRIMITIVE_LITERAL_IN_JSON_ALTERNATIVES;
use crate::json::boolean_in_json;
use crate::json::char_in_json;
use crate::json::json_value;
use crate::json::null_in_json;
use crate::json::number_in_json;
use crate::json::primitive_literal_in_json;
use crate::json::string_in_json;
use crate::recognizer::first_match_named;
use crate::token::JsonPrimitive;
use crate::token::ODataTokenValue;
use std::borrow::Cow;

fn json_value_of(token: Option<crate::token::ODataToken<'_>>) -> Option<(usize, JsonPrimitive<'_>)> {
    token.map(|token| match token.value {
        ODataTokenValue::Json(value) => (token.span.end, value),
        other => panic!("expected a JSON primitive, got {other:?}"),
    })
}

/// Verifies plain, special and percent-encoded string characters.
#[test]
fn char_in_json_plain_characters() {
    assert_eq!(char_in_json(b"a", 0), Some(1));
    assert_eq!(char_in_json(b"'", 0), Some(1));
    assert_eq!(char_in_json(b" ", 0), Some(1));
    assert_eq!(char_in_json(b"{", 0), Some(1));
    assert_eq!(char_in_json(b"%41", 0), Some(3));
}

/// Verifies that an unescaped quotation mark or reverse solidus is not
/// a string character, in either form.
#[test]
fn char_in_json_excludes_quote_and_backslash() {
    assert_eq!(char_in_json(b"\"", 0), None);
    assert_eq!(char_in_json(b"%22", 0), None);
    assert_eq!(char_in_json(b"\\", 0), None);
    assert_eq!(char_in_json(b"%5C", 0), None);
}

/// Verifies every escape sequence, raw and percent-encoded.
#[test]
fn char_in_json_escapes() {
    for source in ["\\\"", "\\\\", "\\/", "\\b", "\\f", "\\n", "\\r", "\\t"] {
        assert_eq!(char_in_json(source.as_bytes(), 0), Some(2), "{source:?}");
    }
    assert_eq!(char_in_json(b"\\u00e9", 0), Some(6));
    assert_eq!(char_in_json(b"\\%2F", 0), Some(4));
    assert_eq!(char_in_json(b"%5C%22", 0), Some(6));
    assert_eq!(char_in_json(b"\\u00g", 0), None);
    assert_eq!(char_in_json(b"\\x", 0), None);
}

/// Verifies that a string token carries the raw, undecoded text.
#[test]
fn string_in_json_raw_text() {
    assert_eq!(
        json_value_of(string_in_json(b"\"hello\"", 0)),
        Some((7, JsonPrimitive::String("hello".into()))),
    );
    assert_eq!(
        json_value_of(string_in_json(b"\"a\\\"b\"", 0)),
        Some((6, JsonPrimitive::String("a\\\"b".into()))),
    );
    assert_eq!(
        json_value_of(string_in_json(b"%22a b%22", 0)),
        Some((9, JsonPrimitive::String("a b".into()))),
    );
    assert_eq!(
        json_value_of(string_in_json(b"\"\"", 0)),
        Some((2, JsonPrimitive::String("".into()))),
    );
}

/// Verifies that raw non-ASCII text is kept when it is valid UTF-8,
/// borrowed from the source.
#[test]
fn string_in_json_utf8_text_is_borrowed() {
    let source = "\"caf\u{e9}\"".as_bytes();
    let (end, value) = json_value_of(string_in_json(source, 0)).unwrap();
    assert_eq!(end, source.len());
    assert!(matches!(value, JsonPrimitive::String(Cow::Borrowed("caf\u{e9}"))));
}

/// Verifies that a body whose raw bytes are not valid UTF-8 is no
/// match instead of being rewritten with replacement characters.
#[test]
fn string_in_json_invalid_utf8_does_not_match() {
    assert!(string_in_json(b"\"\xff\xfe\"", 0).is_none());
    assert!(string_in_json(b"\"ab\xc3\"", 0).is_none());
    assert!(json_value(b"\"\xff\xfe\"", 0).is_none());
    assert!(primitive_literal_in_json(b"\"\xff\xfe\"", 0).is_none());
}

/// Verifies that an unterminated string is no match.
#[test]
fn string_in_json_unterminated() {
    assert!(string_in_json(b"\"abc", 0).is_none());
    assert!(string_in_json(b"\"abc\\\"", 0).is_none());
}

/// Verifies number shapes and their parsed values.
#[test]
fn number_in_json_values() {
    let cases = [
        ("0", 0.0),
        ("-12.5e3", -12_500.0),
        ("1E2", 100.0),
        ("2.5e-1", 0.25),
        ("42", 42.0),
    ];
    for (source, expected) in cases {
        assert_eq!(
            json_value_of(number_in_json(source.as_bytes(), 0)),
            Some((source.len(), JsonPrimitive::Number(expected))),
            "{source:?}",
        );
    }
}

/// Verifies that incomplete parts are left unconsumed and that a
/// leading zero ends the integer part.
#[test]
fn number_in_json_partial_forms() {
    let end_of = |source: &str| number_in_json(source.as_bytes(), 0).map(|token| token.next());
    assert_eq!(end_of("01"), Some(1));
    assert_eq!(end_of("1."), Some(1));
    assert_eq!(end_of("1e"), Some(1));
    assert_eq!(end_of("1e+"), Some(1));
    assert_eq!(end_of("-"), None);
    assert_eq!(end_of(".5"), None);
    assert_eq!(end_of("+1"), None);
}

/// Verifies the keyword primitives.
#[test]
fn keyword_primitives() {
    assert_eq!(
        json_value_of(boolean_in_json(b"true", 0)),
        Some((4, JsonPrimitive::Boolean(true))),
    );
    assert_eq!(
        json_value_of(boolean_in_json(b"false", 0)),
        Some((5, JsonPrimitive::Boolean(false))),
    );
    assert_eq!(json_value_of(null_in_json(b"null", 0)), Some((4, JsonPrimitive::Null)));
    assert!(null_in_json(b"Null", 0).is_none());
}

/// Verifies which alternative of primitiveLiteralInJSON wins.
#[test]
fn primitive_literal_in_json_dispatch() {
    let cases = [
        ("\"x\"", "stringInJSON"),
        ("-1.5", "numberInJSON"),
        ("false", "booleanInJSON"),
        ("null", "nullInJSON"),
    ];
    for (source, expected) in cases {
        let (name, token) =
            first_match_named(source.as_bytes(), 0, PRIMITIVE_LITERAL_IN_JSON_ALTERNATIVES)
                .unwrap();
        assert_eq!(name, expected);
        assert_eq!(primitive_literal_in_json(source.as_bytes(), 0), Some(token));
    }
    assert!(primitive_literal_in_json(b"'x'", 0).is_none());
}
