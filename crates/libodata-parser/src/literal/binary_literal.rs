use crate::lexer::base64b16;
use crate::lexer::base64b8;
use crate::lexer::exact;
use crate::lexer::is_base64char;
use crate::lexer::required;
use crate::lexer::squote;
use crate::literal::edm_literal;
use crate::token::EdmType;
use crate::token::ODataToken;

/// `binary = "binary" SQUOTE binaryValue SQUOTE`
///
/// `binaryValue = *(4base64char) [ base64b16 / base64b8 ]`
///
/// Full 4-character groups are consumed greedily; the final partial
/// group, if any, must be one of the two padded tail shapes.
pub fn binary_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let after_keyword = exact(source, index, "binary")?;
    let mut cursor = squote(source, after_keyword)?;

    while let Some(group_end) = required(source, cursor, is_base64char, 4, Some(4)) {
        cursor = group_end;
    }
    if let Some(tail_end) = base64b16(source, cursor).or_else(|| base64b8(source, cursor)) {
        cursor = tail_end;
    }

    let end = squote(source, cursor)?;
    Some(edm_literal(source, index, end, EdmType::Binary))
}
