//! Per-byte character-class predicates from the core ABNF rules and
//! the URI grammar.

/// `ALPHA = %x41-5A / %x61-7A`
#[inline]
pub fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// `DIGIT = %x30-39`
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// `HEXDIG = DIGIT / A-to-F`, where `A-to-F` accepts either case.
#[inline]
pub fn is_hexdig(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// `oneToNine = "1" / ... / "9"`
#[inline]
pub fn is_one_to_nine(byte: u8) -> bool {
    matches!(byte, b'1'..=b'9')
}

/// `base64char = ALPHA / DIGIT / "-" / "_"` (the URL-safe alphabet).
#[inline]
pub fn is_base64char(byte: u8) -> bool {
    is_alpha(byte) || is_digit(byte) || byte == b'-' || byte == b'_'
}

/// `SP = %x20`
#[inline]
pub fn is_sp(byte: u8) -> bool {
    byte == b' '
}

/// `HTAB = %x09`
#[inline]
pub fn is_htab(byte: u8) -> bool {
    byte == b'\t'
}

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
#[inline]
pub fn is_unreserved(byte: u8) -> bool {
    is_alpha(byte) || is_digit(byte) || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// `other-delims = "!" / "(" / ")" / "*" / "+" / "," / ";"`
#[inline]
pub fn is_other_delim(byte: u8) -> bool {
    matches!(byte, b'!' | b'(' | b')' | b'*' | b'+' | b',' | b';')
}

/// A byte belonging to a raw (not percent-encoded) non-ASCII UTF-8
/// sequence, as permitted by the IRI form of the grammar.
#[inline]
pub fn is_non_ascii(byte: u8) -> bool {
    byte >= 0x80
}

/// `identifierLeadingCharacter = ALPHA / "_"`
#[inline]
pub fn is_identifier_leading(byte: u8) -> bool {
    is_alpha(byte) || byte == b'_'
}

/// `identifierCharacter = ALPHA / "_" / DIGIT`
#[inline]
pub fn is_identifier_char(byte: u8) -> bool {
    is_identifier_leading(byte) || is_digit(byte)
}
