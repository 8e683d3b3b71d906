use crate::literal::duration_value;
use crate::literal::tests::utils::assert_full_match;
use crate::literal::tests::utils::assert_no_match;
use crate::token::EdmType;

/// Verifies day-only, time-only and combined durations.
#[test]
fn duration_shapes() {
    assert_full_match(duration_value, "duration'P1D'", EdmType::Duration);
    assert_full_match(duration_value, "duration'PT2H'", EdmType::Duration);
    assert_full_match(duration_value, "duration'P1DT2H3M4.5S'", EdmType::Duration);
    assert_full_match(duration_value, "duration'-PT30M'", EdmType::Duration);
    assert_full_match(duration_value, "duration%27P1D%27", EdmType::Duration);
}

/// Verifies that the keyword and the quotes are required.
#[test]
fn duration_requires_keyword_and_quotes() {
    assert_no_match(duration_value, "'P1D'");
    assert_no_match(duration_value, "P1D");
    assert_no_match(duration_value, "duration'P1D");
}

/// Verifies that a duration needs a day part or a time part.
#[test]
fn duration_requires_a_component() {
    assert_no_match(duration_value, "duration'P'");
    assert_no_match(duration_value, "duration''");
}

/// Verifies designator order and that only seconds take a fraction.
#[test]
fn duration_designators() {
    assert_no_match(duration_value, "duration'PT1M1H'");
    assert_no_match(duration_value, "duration'PT1H1H'");
    assert_no_match(duration_value, "duration'PT1.5H'");
    assert_no_match(duration_value, "duration'P1.5D'");
    assert_no_match(duration_value, "duration'P1H'");
}
