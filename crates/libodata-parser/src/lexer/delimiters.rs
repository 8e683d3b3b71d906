//! Punctuation, whitespace and path-character rules.
//!
//! Most delimiters of the OData grammar have a raw form and a
//! percent-encoded form (`'` and `%27` are the same SQUOTE). Every
//! function here accepts both and returns the offset after whichever
//! form matched. The percent-encoded hex digits are matched
//! case-insensitively, as URI normalization allows.

use crate::lexer::byte_class::is_hexdig;
use crate::lexer::byte_class::is_htab;
use crate::lexer::byte_class::is_non_ascii;
use crate::lexer::byte_class::is_other_delim;
use crate::lexer::byte_class::is_sp;
use crate::lexer::byte_class::is_unreserved;
use crate::lexer::repetition::byte_at;

/// Matches the raw byte `raw` or the percent-encoding `%XY` whose hex
/// digits are `encoded` (compared case-insensitively).
#[inline]
pub(crate) fn raw_or_encoded(source: &[u8], index: usize, raw: u8, encoded: &[u8; 2]) -> Option<usize> {
    match byte_at(source, index)? {
        byte if byte == raw => Some(index + 1),
        b'%' => {
            let hi = byte_at(source, index + 1)?;
            let lo = byte_at(source, index + 2)?;
            (hi.eq_ignore_ascii_case(&encoded[0]) && lo.eq_ignore_ascii_case(&encoded[1]))
                .then_some(index + 3)
        },
        _ => None,
    }
}

/// `SQUOTE = "'" / "%27"`
#[inline]
pub fn squote(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b'\'', b"27")
}

/// `SIGN = "+" / "%2B" / "-"`
#[inline]
pub fn sign(source: &[u8], index: usize) -> Option<usize> {
    match byte_at(source, index)? {
        b'-' => Some(index + 1),
        _ => raw_or_encoded(source, index, b'+', b"2B"),
    }
}

/// `COMMA = "," / "%2C"`
#[inline]
pub fn comma(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b',', b"2C")
}

/// `OPEN = "(" / "%28"`
#[inline]
pub fn open(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b'(', b"28")
}

/// `CLOSE = ")" / "%29"`
#[inline]
pub fn close(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b')', b"29")
}

/// `COLON = ":" / "%3A"`
#[inline]
pub fn colon(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b':', b"3A")
}

/// `EQ = "="`
#[inline]
pub fn eq(source: &[u8], index: usize) -> Option<usize> {
    (byte_at(source, index)? == b'=').then_some(index + 1)
}

/// `SEMI = ";" / "%3B"`
#[inline]
pub fn semi(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b';', b"3B")
}

/// `AT = "@" / "%40"`
#[inline]
pub fn at(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b'@', b"40")
}

/// `quotation-mark = DQUOTE / "%22"`
#[inline]
pub fn quotation_mark(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b'"', b"22")
}

/// `escape = "\" / "%5C"`
#[inline]
pub fn escape(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, index, b'\\', b"5C")
}

/// A single whitespace unit: `SP / HTAB / "%20" / "%09"`.
#[inline]
fn whitespace_unit(source: &[u8], index: usize) -> Option<usize> {
    match byte_at(source, index)? {
        byte if is_sp(byte) || is_htab(byte) => Some(index + 1),
        b'%' => raw_or_encoded(source, index, b' ', b"20")
            .or_else(|| raw_or_encoded(source, index, b'\t', b"09")),
        _ => None,
    }
}

/// `RWS = 1*( SP / HTAB / "%20" / "%09" )` ("required" whitespace).
pub fn rws(source: &[u8], index: usize) -> Option<usize> {
    let end = bws(source, index);
    (end > index).then_some(end)
}

/// `BWS = *( SP / HTAB / "%20" / "%09" )` ("bad" whitespace).
///
/// Always succeeds; returns `index` itself when no whitespace follows.
pub fn bws(source: &[u8], mut index: usize) -> usize {
    while let Some(next) = whitespace_unit(source, index) {
        index = next;
    }
    index
}

/// `pct-encoded = "%" HEXDIG HEXDIG`, returning the decoded byte and
/// the offset after it.
#[inline]
pub fn pct_encoded(source: &[u8], index: usize) -> Option<(u8, usize)> {
    if byte_at(source, index)? != b'%' {
        return None;
    }
    let hi = byte_at(source, index + 1).filter(|&byte| is_hexdig(byte))?;
    let lo = byte_at(source, index + 2).filter(|&byte| is_hexdig(byte))?;
    let decoded = (hex_value(hi) << 4) | hex_value(lo);
    Some((decoded, index + 3))
}

#[inline]
fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}

/// `pchar-no-SQUOTE = unreserved / pct-encoded-no-SQUOTE / other-delims
/// / "$" / "&" / "=" / ":" / "@"`
///
/// Raw non-ASCII bytes are also accepted, one byte at a time, so that
/// IRIs carrying unencoded UTF-8 text are recognized.
pub fn pchar_no_squote(source: &[u8], index: usize) -> Option<usize> {
    let byte = byte_at(source, index)?;
    if is_unreserved(byte)
        || is_other_delim(byte)
        || is_non_ascii(byte)
        || matches!(byte, b'$' | b'&' | b'=' | b':' | b'@')
    {
        return Some(index + 1);
    }
    match pct_encoded(source, index) {
        Some((b'\'', _)) | None => None,
        Some((_, next)) => Some(next),
    }
}
