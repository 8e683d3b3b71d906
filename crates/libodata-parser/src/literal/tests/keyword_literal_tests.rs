use crate::literal::boolean_value;
use crate::literal::null_value;
use crate::literal::tests::utils::assert_full_match;
use crate::literal::tests::utils::assert_no_match;
use crate::token::EdmType;
use crate::token::ODataTokenValue;

/// Verifies that null carries the untyped null value.
#[test]
fn null_literal() {
    let token = null_value(b"null", 0).unwrap();
    assert_eq!(token.next(), 4);
    assert_eq!(token.value, ODataTokenValue::Null);
    assert!(null_value(b"NULL", 0).is_none());
}

/// Verifies that the keywords do not look at the following byte.
#[test]
fn keywords_ignore_following_byte() {
    assert_eq!(null_value(b"nullable", 0).map(|token| token.next()), Some(4));
    assert_eq!(boolean_value(b"trueish", 0).map(|token| token.next()), Some(4));
}

/// Verifies both boolean spellings, which are case-sensitive.
#[test]
fn boolean_literals() {
    assert_full_match(boolean_value, "true", EdmType::Boolean);
    assert_full_match(boolean_value, "false", EdmType::Boolean);
    assert_no_match(boolean_value, "True");
}
