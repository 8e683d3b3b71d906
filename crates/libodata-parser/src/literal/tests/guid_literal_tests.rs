use crate::literal::guid_value;
use crate::literal::tests::utils::assert_full_match;
use crate::literal::tests::utils::assert_no_match;
use crate::literal::tests::utils::match_at_start;
use crate::token::EdmType;

/// Verifies a well-formed GUID in mixed case.
#[test]
fn guid_mixed_case() {
    assert_full_match(guid_value, "01234567-89ab-CDEF-0123-456789abcdef", EdmType::Guid);
}

/// Verifies that a GUID always spans 36 bytes, whatever follows.
#[test]
fn guid_ignores_following_byte() {
    assert_eq!(
        match_at_start(guid_value, "01234567-89ab-cdef-0123-456789abcdef0"),
        Some((36, Some(EdmType::Guid))),
    );
}

/// Verifies that group widths and separators are exact.
#[test]
fn guid_group_shapes() {
    assert_no_match(guid_value, "0123456-89ab-cdef-0123-456789abcdef");
    assert_no_match(guid_value, "01234567-89ab-cdef-0123-456789abcde");
    assert_no_match(guid_value, "01234567_89ab-cdef-0123-456789abcdef");
    assert_no_match(guid_value, "0123456g-89ab-cdef-0123-456789abcdef");
}
