use crate::literal::PRIMITIVE_LITERAL_ALTERNATIVES;
use crate::literal::primitive_literal;
use crate::recognizer::first_match_named;
use crate::token::EdmType;

/// Returns the name of the alternative that wins at offset 0 and the
/// offset it ends at.
fn winner(source: &str) -> Option<(&'static str, usize)> {
    first_match_named(source.as_bytes(), 0, PRIMITIVE_LITERAL_ALTERNATIVES)
        .map(|(name, token)| (name, token.next()))
}

/// Verifies which alternative wins for one representative of every
/// literal form.
#[test]
fn each_form_is_won_by_its_own_rule() {
    let cases = [
        ("null", "nullValue"),
        ("true", "booleanValue"),
        ("01234567-89ab-cdef-0123-456789abcdef", "guidValue"),
        ("2024-01-01", "dateValue"),
        ("2024-01-01T00:00Z", "dateTimeOffsetValue"),
        ("12:30", "timeOfDayValue"),
        ("3.14", "decimalValue"),
        ("3.14e5", "doubleValue"),
        ("-INF", "doubleValue"),
        ("42", "sbyteValue"),
        ("200", "byteValue"),
        ("-200", "int16Value"),
        ("40000", "int32Value"),
        ("3000000000", "int64Value"),
        ("'text'", "string"),
        ("duration'P1D'", "duration"),
        ("binary'AQ=='", "binary"),
        ("NS.Color'Red'", "enum"),
        ("geography'SRID=4326;Point(1.0 2.0)'", "geographyPoint"),
        (
            "geometry'SRID=0;Polygon((0.0 0.0,1.0 0.0,0.0 0.0))'",
            "geometryPolygon",
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(winner(source), Some((expected, source.len())), "{source:?}");
    }
}

/// Verifies that the narrowest integer type wins for small values.
#[test]
fn narrowest_integer_wins() {
    let token = primitive_literal(b"7", 0).unwrap();
    assert_eq!(token.edm_type(), Some(EdmType::SByte));
    let token = primitive_literal(b"-32768", 0).unwrap();
    assert_eq!(token.edm_type(), Some(EdmType::Int16));
}

/// Verifies that the winning alternative need not consume the whole
/// input: `1e5` has no fraction, so it is an integer followed by `e5`.
#[test]
fn first_match_may_be_a_prefix() {
    assert_eq!(winner("1e5"), Some(("sbyteValue", 1)));
}

/// Verifies that the dispatcher returns the same token as the winning
/// alternative.
#[test]
fn dispatcher_agrees_with_named_dispatch() {
    for source in ["null", "3.14", "'x'", "duration'PT1S'"] {
        let (_, named) =
            first_match_named(source.as_bytes(), 0, PRIMITIVE_LITERAL_ALTERNATIVES).unwrap();
        assert_eq!(primitive_literal(source.as_bytes(), 0), Some(named));
    }
}

/// Verifies that text matching no alternative is no match.
#[test]
fn unrecognized_input() {
    for source in ["", "nil", "'open", "geography'Point(1.0 2.0)'", "@"] {
        assert!(primitive_literal(source.as_bytes(), 0).is_none(), "{source:?}");
    }
}

/// Verifies that the table lists every alternative exactly once.
#[test]
fn alternative_names_are_unique() {
    let mut names: Vec<_> = PRIMITIVE_LITERAL_ALTERNATIVES
        .iter()
        .map(|alternative| alternative.name)
        .collect();
    let count = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), count);
    assert_eq!(count, 32);
}
