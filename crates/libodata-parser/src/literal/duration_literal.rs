use crate::lexer::byte_at;
use crate::lexer::exact;
use crate::lexer::is_digit;
use crate::lexer::required;
use crate::lexer::sign;
use crate::lexer::squote;
use crate::literal::edm_literal;
use crate::token::EdmType;
use crate::token::ODataToken;

/// `duration = "duration" SQUOTE durationValue SQUOTE`
///
/// `durationValue = [ SIGN ] "P" [ 1*DIGIT "D" ] [ "T" [ 1*DIGIT "H" ]
/// [ 1*DIGIT "M" ] [ 1*DIGIT [ "." 1*DIGIT ] "S" ] ]`
///
/// At least one of the day part and the `T` marker must be present.
pub fn duration_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let after_keyword = exact(source, index, "duration")?;
    let mut cursor = squote(source, after_keyword)?;
    cursor = sign(source, cursor).unwrap_or(cursor);
    if byte_at(source, cursor)? != b'P' {
        return None;
    }
    cursor += 1;

    let mut has_component = false;
    if let Some(digits_end) = required(source, cursor, is_digit, 1, None) {
        if byte_at(source, digits_end)? != b'D' {
            return None;
        }
        cursor = digits_end + 1;
        has_component = true;
    }
    if byte_at(source, cursor) == Some(b'T') {
        cursor = time_part(source, cursor + 1)?;
        has_component = true;
    }
    if !has_component {
        return None;
    }

    let end = squote(source, cursor)?;
    Some(edm_literal(source, index, end, EdmType::Duration))
}

/// Matches the components after `T`, each `1*DIGIT` followed by its
/// designator. Designators must appear in `H`, `M`, `S` order and at
/// most once; only seconds may carry a fraction.
fn time_part(source: &[u8], mut cursor: usize) -> Option<usize> {
    let mut remaining_designators: &[u8] = b"HMS";
    while let Some(digits_end) = required(source, cursor, is_digit, 1, None) {
        let (designator_at, has_fraction) = if byte_at(source, digits_end) == Some(b'.') {
            (required(source, digits_end + 1, is_digit, 1, None)?, true)
        } else {
            (digits_end, false)
        };
        let designator = byte_at(source, designator_at)?;
        let position = remaining_designators
            .iter()
            .position(|&expected| expected == designator)?;
        if has_fraction && designator != b'S' {
            return None;
        }
        remaining_designators = &remaining_designators[position + 1..];
        cursor = designator_at + 1;
    }
    Some(cursor)
}
