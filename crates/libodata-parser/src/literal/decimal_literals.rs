//! Decimal, double and single literals.
//!
//! All three require a fraction (`1*DIGIT "." 1*DIGIT`); a literal
//! without one is left to the integer rules. Only a lowercase `e`
//! introduces an exponent.

use crate::lexer::byte_at;
use crate::lexer::is_digit;
use crate::lexer::nan_infinity;
use crate::lexer::required;
use crate::lexer::sign;
use crate::literal::edm_literal;
use crate::token::EdmType;
use crate::token::ODataToken;

/// Matches `[ SIGN ] 1*DIGIT "." 1*DIGIT` and returns the offset after
/// the fraction digits.
fn signed_fraction(source: &[u8], index: usize) -> Option<usize> {
    let digits_start = sign(source, index).unwrap_or(index);
    let int_end = required(source, digits_start, is_digit, 1, None)?;
    if byte_at(source, int_end)? != b'.' {
        return None;
    }
    required(source, int_end + 1, is_digit, 1, None)
}

/// `decimalValue = [ SIGN ] 1*DIGIT "." 1*DIGIT`
///
/// A literal immediately followed by `e` is an exponent form and is no
/// match here, so that `doubleValue` can take it. No other overlap
/// with double/single is resolved by this rule.
pub fn decimal_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let end = signed_fraction(source, index)?;
    if byte_at(source, end) == Some(b'e') {
        return None;
    }
    Some(edm_literal(source, index, end, EdmType::Decimal))
}

/// `doubleValue = nanInfinity / [ SIGN ] 1*DIGIT "." 1*DIGIT [ "e" [ SIGN ]
/// 1*DIGIT ]`
///
/// An `e` that is not followed by exponent digits is not part of the
/// literal; the token ends before it.
pub fn double_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    if let Some(end) = nan_infinity(source, index) {
        return Some(edm_literal(source, index, end, EdmType::Double));
    }

    let fraction_end = signed_fraction(source, index)?;
    let mut end = fraction_end;
    if byte_at(source, fraction_end) == Some(b'e') {
        let exponent_start = sign(source, fraction_end + 1).unwrap_or(fraction_end + 1);
        if let Some(exponent_end) = required(source, exponent_start, is_digit, 1, None) {
            end = exponent_end;
        }
    }
    Some(edm_literal(source, index, end, EdmType::Double))
}

/// `singleValue = doubleValue`, tagged `Edm.Single`.
pub fn single_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    double_value(source, index).map(|token| token.with_edm_type(EdmType::Single))
}
