//! Small fixed-shape fragments shared by several literal rules.

use crate::lexer::byte_class::is_base64char;
use crate::lexer::byte_class::is_identifier_char;
use crate::lexer::byte_class::is_identifier_leading;
use crate::lexer::repetition::byte_at;
use crate::lexer::repetition::byte_is;
use crate::lexer::repetition::exact;
use crate::lexer::repetition::required;

/// Maximum number of bytes in an `odataIdentifier`.
pub const MAX_IDENTIFIER_LEN: usize = 128;

/// `nanInfinity = 'NaN' / '-INF' / 'INF'`
pub fn nan_infinity(source: &[u8], index: usize) -> Option<usize> {
    exact(source, index, "NaN")
        .or_else(|| exact(source, index, "-INF"))
        .or_else(|| exact(source, index, "INF"))
}

/// `base64b16 = 2base64char ( 'A' / 'E' / 'I' / 'M' / 'Q' / 'U' / 'Y' /
/// 'c' / 'g' / 'k' / 'o' / 's' / 'w' / '0' / '4' / '8' ) [ "=" ]`
pub fn base64b16(source: &[u8], index: usize) -> Option<usize> {
    let end = required(source, index, is_base64char, 2, Some(2))?;
    if !byte_at(source, end).is_some_and(|byte| b"AEIMQUYcgkosw048".contains(&byte)) {
        return None;
    }
    let end = end + 1;
    Some(if byte_at(source, end) == Some(b'=') { end + 1 } else { end })
}

/// `base64b8 = base64char ( 'A' / 'Q' / 'g' / 'w' ) [ "==" ]`
pub fn base64b8(source: &[u8], index: usize) -> Option<usize> {
    if !byte_is(source, index, is_base64char) {
        return None;
    }
    if !byte_at(source, index + 1).is_some_and(|byte| b"AQgw".contains(&byte)) {
        return None;
    }
    let end = index + 2;
    Some(exact(source, end, "==").unwrap_or(end))
}

/// `odataIdentifier = identifierLeadingCharacter *127identifierCharacter`
///
/// An identifier longer than 128 bytes is no match rather than a
/// truncated one.
pub fn odata_identifier_end(source: &[u8], index: usize) -> Option<usize> {
    if !byte_is(source, index, is_identifier_leading) {
        return None;
    }
    let end = required(
        source,
        index + 1,
        is_identifier_char,
        0,
        Some(MAX_IDENTIFIER_LEN - 1),
    )?;
    (!byte_is(source, end, is_identifier_char)).then_some(end)
}

/// `geographyPrefix = "geography"`
pub fn geography_prefix(source: &[u8], index: usize) -> Option<usize> {
    exact(source, index, "geography")
}

/// `geometryPrefix = "geometry"`
pub fn geometry_prefix(source: &[u8], index: usize) -> Option<usize> {
    exact(source, index, "geometry")
}
