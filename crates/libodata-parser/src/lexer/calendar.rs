//! Fixed-width calendar and clock fields.
//!
//! These rules are syntactic: `day` accepts `31` regardless of the
//! month, and `second` stops at `59` because the grammar has no leap
//! second. Each returns the offset after the field.

use crate::lexer::byte_class::is_digit;
use crate::lexer::byte_class::is_one_to_nine;
use crate::lexer::repetition::byte_at;
use crate::lexer::repetition::byte_is;
use crate::lexer::repetition::required;

/// Matches two bytes where the first satisfies `first` and the second
/// satisfies `second`.
#[inline]
fn pair(
    source: &[u8],
    index: usize,
    first: impl Fn(u8) -> bool,
    second: impl Fn(u8) -> bool,
) -> Option<usize> {
    let a = byte_at(source, index)?;
    let b = byte_at(source, index + 1)?;
    (first(a) && second(b)).then_some(index + 2)
}

/// `year = [ "-" ] ( "0" 3DIGIT / oneToNine 3*DIGIT )`
pub fn year(source: &[u8], index: usize) -> Option<usize> {
    let mut cursor = index;
    if byte_at(source, cursor) == Some(b'-') {
        cursor += 1;
    }
    match byte_at(source, cursor)? {
        b'0' => {
            let end = required(source, cursor + 1, is_digit, 3, Some(3))?;
            // "0" 3DIGIT is exactly four digits.
            (!byte_is(source, end, is_digit)).then_some(end)
        },
        byte if is_one_to_nine(byte) => required(source, cursor + 1, is_digit, 3, None),
        _ => None,
    }
}

/// `month = "0" oneToNine / "1" ( "0" / "1" / "2" )`
pub fn month(source: &[u8], index: usize) -> Option<usize> {
    match byte_at(source, index)? {
        b'0' => pair(source, index, |_| true, is_one_to_nine),
        b'1' => pair(source, index, |_| true, |b| matches!(b, b'0'..=b'2')),
        _ => None,
    }
}

/// `day = "0" oneToNine / ( "1" / "2" ) DIGIT / "3" ( "0" / "1" )`
pub fn day(source: &[u8], index: usize) -> Option<usize> {
    match byte_at(source, index)? {
        b'0' => pair(source, index, |_| true, is_one_to_nine),
        b'1' | b'2' => pair(source, index, |_| true, is_digit),
        b'3' => pair(source, index, |_| true, |b| matches!(b, b'0' | b'1')),
        _ => None,
    }
}

/// `hour = ( "0" / "1" ) DIGIT / "2" ( "0" / "1" / "2" / "3" )`
pub fn hour(source: &[u8], index: usize) -> Option<usize> {
    match byte_at(source, index)? {
        b'0' | b'1' => pair(source, index, |_| true, is_digit),
        b'2' => pair(source, index, |_| true, |b| matches!(b, b'0'..=b'3')),
        _ => None,
    }
}

/// `zeroToFiftyNine = ( "0" / "1" / "2" / "3" / "4" / "5" ) DIGIT`
#[inline]
fn zero_to_fifty_nine(source: &[u8], index: usize) -> Option<usize> {
    pair(source, index, |b| matches!(b, b'0'..=b'5'), is_digit)
}

/// `minute = zeroToFiftyNine`
pub fn minute(source: &[u8], index: usize) -> Option<usize> {
    zero_to_fifty_nine(source, index)
}

/// `second = zeroToFiftyNine`
pub fn second(source: &[u8], index: usize) -> Option<usize> {
    zero_to_fifty_nine(source, index)
}

/// `fractionalSeconds = 1*12DIGIT`
pub fn fractional_seconds(source: &[u8], index: usize) -> Option<usize> {
    required(source, index, is_digit, 1, Some(12))
}
