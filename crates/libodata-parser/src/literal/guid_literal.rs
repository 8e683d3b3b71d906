use crate::lexer::byte_at;
use crate::lexer::is_hexdig;
use crate::lexer::required;
use crate::literal::edm_literal;
use crate::token::EdmType;
use crate::token::ODataToken;

/// Hex-digit group widths of `8HEXDIG "-" 4HEXDIG "-" 4HEXDIG "-" 4HEXDIG
/// "-" 12HEXDIG`.
const GUID_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// `guidValue = 8HEXDIG "-" 4HEXDIG "-" 4HEXDIG "-" 4HEXDIG "-" 12HEXDIG`
///
/// Always spans exactly 36 bytes; the byte after the last group is not
/// inspected.
pub fn guid_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let mut cursor = index;
    for (group, width) in GUID_GROUPS.iter().enumerate() {
        if group > 0 {
            if byte_at(source, cursor)? != b'-' {
                return None;
            }
            cursor += 1;
        }
        cursor = required(source, cursor, is_hexdig, *width, Some(*width))?;
    }
    Some(edm_literal(source, index, cursor, EdmType::Guid))
}
