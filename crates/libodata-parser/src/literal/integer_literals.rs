//! The signed and unsigned integer families.
//!
//! Each rule is `[ SIGN ] 1*N DIGIT` (no sign for `Edm.Byte`), where N
//! is the number of decimal digits of the type's widest value. A digit
//! immediately after the N-th is a rejection of the whole literal, not
//! a shorter match, and the parsed magnitude must fall inside the
//! type's range for the sign that was written.

use crate::lexer::byte_at;
use crate::lexer::byte_is;
use crate::lexer::is_digit;
use crate::lexer::required;
use crate::lexer::sign;
use crate::literal::edm_literal;
use crate::token::EdmType;
use crate::token::ODataToken;

/// Range and shape of one integer type.
struct IntegerBounds {
    edm_type: EdmType,
    max_digits: usize,
    /// `None` for types that take no sign.
    max_negative_magnitude: Option<u64>,
    max_positive_magnitude: u64,
}

const SBYTE: IntegerBounds = IntegerBounds {
    edm_type: EdmType::SByte,
    max_digits: 3,
    max_negative_magnitude: Some(128),
    max_positive_magnitude: 127,
};

const BYTE: IntegerBounds = IntegerBounds {
    edm_type: EdmType::Byte,
    max_digits: 3,
    max_negative_magnitude: None,
    max_positive_magnitude: 255,
};

const INT16: IntegerBounds = IntegerBounds {
    edm_type: EdmType::Int16,
    max_digits: 5,
    max_negative_magnitude: Some(32_768),
    max_positive_magnitude: 32_767,
};

const INT32: IntegerBounds = IntegerBounds {
    edm_type: EdmType::Int32,
    max_digits: 10,
    max_negative_magnitude: Some(2_147_483_648),
    max_positive_magnitude: 2_147_483_647,
};

const INT64: IntegerBounds = IntegerBounds {
    edm_type: EdmType::Int64,
    max_digits: 19,
    max_negative_magnitude: Some(9_223_372_036_854_775_808),
    max_positive_magnitude: 9_223_372_036_854_775_807,
};

fn integer_value<'src>(
    source: &'src [u8],
    index: usize,
    bounds: &IntegerBounds,
) -> Option<ODataToken<'src>> {
    let (digits_start, negative) = match bounds.max_negative_magnitude {
        Some(_) => match sign(source, index) {
            Some(next) => (next, byte_at(source, index) == Some(b'-')),
            None => (index, false),
        },
        None => (index, false),
    };

    let digits_end = required(source, digits_start, is_digit, 1, Some(bounds.max_digits))?;
    if byte_is(source, digits_end, is_digit) {
        return None;
    }

    // At most 19 ASCII digits, which always fits in a u64.
    let magnitude = source[digits_start..digits_end]
        .iter()
        .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));
    let limit = if negative {
        bounds.max_negative_magnitude?
    } else {
        bounds.max_positive_magnitude
    };
    if magnitude > limit {
        return None;
    }

    Some(edm_literal(source, index, digits_end, bounds.edm_type))
}

/// `sbyteValue = [ SIGN ] 1*3DIGIT`, range -128..=127.
pub fn sbyte_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    integer_value(source, index, &SBYTE)
}

/// `byteValue = 1*3DIGIT`, range 0..=255.
pub fn byte_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    integer_value(source, index, &BYTE)
}

/// `int16Value = [ SIGN ] 1*5DIGIT`, range -32768..=32767.
pub fn int16_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    integer_value(source, index, &INT16)
}

/// `int32Value = [ SIGN ] 1*10DIGIT`, range -2147483648..=2147483647.
pub fn int32_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    integer_value(source, index, &INT32)
}

/// `int64Value = [ SIGN ] 1*19DIGIT`, range
/// -9223372036854775808..=9223372036854775807.
pub fn int64_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    integer_value(source, index, &INT64)
}
