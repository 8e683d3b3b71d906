use crate::literal::date_time_offset_value;
use crate::literal::date_value;
use crate::literal::tests::utils::assert_full_match;
use crate::literal::tests::utils::assert_no_match;
use crate::literal::tests::utils::match_at_start;
use crate::literal::time_of_day_value;
use crate::token::EdmType;

/// Verifies date literals, which are checked syntactically only.
#[test]
fn dates() {
    assert_full_match(date_value, "2024-01-31", EdmType::Date);
    assert_full_match(date_value, "2024-02-30", EdmType::Date);
    assert_full_match(date_value, "-0044-03-15", EdmType::Date);
    assert_no_match(date_value, "2024-13-01");
    assert_no_match(date_value, "2024-1-01");
    assert_no_match(date_value, "24-01-01");
}

/// Verifies that a date followed by `T` is left to date-time-offset.
#[test]
fn date_yields_to_date_time_offset() {
    assert_no_match(date_value, "2024-01-01T12:00Z");
    assert_full_match(date_time_offset_value, "2024-01-01T12:00Z", EdmType::DateTimeOffset);
}

/// Verifies the zone designators of date-time-offset.
#[test]
fn date_time_offset_zones() {
    assert_full_match(date_time_offset_value, "2024-01-01T12:00:00Z", EdmType::DateTimeOffset);
    assert_full_match(
        date_time_offset_value,
        "2024-01-01T12:00:00.123+05:30",
        EdmType::DateTimeOffset,
    );
    assert_full_match(
        date_time_offset_value,
        "2024-01-01T23:59:59-08:00",
        EdmType::DateTimeOffset,
    );
    assert_no_match(date_time_offset_value, "2024-01-01T12:00");
    assert_no_match(date_time_offset_value, "2024-01-01T12:00+5:30");
}

/// Verifies that the `T` and `Z` markers are uppercase only.
#[test]
fn markers_are_case_sensitive() {
    assert_no_match(date_time_offset_value, "2024-01-01t12:00Z");
    assert_no_match(date_time_offset_value, "2024-01-01T12:00z");
    assert_eq!(match_at_start(date_value, "2024-01-01t12:00Z"), Some((10, Some(EdmType::Date))));
}

/// Verifies time-of-day literals with optional seconds and fraction.
#[test]
fn times_of_day() {
    assert_full_match(time_of_day_value, "12:30", EdmType::TimeOfDay);
    assert_full_match(time_of_day_value, "12:30:15", EdmType::TimeOfDay);
    assert_full_match(time_of_day_value, "12:30:15.123456789012", EdmType::TimeOfDay);
    assert_no_match(time_of_day_value, "24:00");
    assert_no_match(time_of_day_value, "12:60");
}

/// Verifies that a separator after the minute commits to the next
/// field.
#[test]
fn dangling_separators_are_no_match() {
    assert_no_match(time_of_day_value, "12:30:");
    assert_no_match(time_of_day_value, "12:30:15.");
}
