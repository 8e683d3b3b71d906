use crate::lexer::byte_at;
use crate::lexer::comma;
use crate::lexer::odata_identifier_end;
use crate::lexer::squote;
use crate::literal::int64_value;
use crate::token::ODataToken;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use crate::token::ODataTokenVec;
use crate::token::source_text;
use crate::token::tokenize;

/// `odataIdentifier = identifierLeadingCharacter *127identifierCharacter`
pub fn odata_identifier(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let end = odata_identifier_end(source, index)?;
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::Identifier(source_text(source, index, end)?),
        ODataTokenKind::Identifier,
    ))
}

/// `namespace "." odataIdentifier`, where `namespace = namespacePart *(
/// "." namespacePart )`: two or more identifiers joined by dots.
/// Returns the offset after the last identifier.
pub(crate) fn qualified_name_end(source: &[u8], index: usize) -> Option<usize> {
    let mut end = odata_identifier_end(source, index)?;
    let mut parts = 1;
    while byte_at(source, end) == Some(b'.') {
        let Some(part_end) = odata_identifier_end(source, end + 1) else {
            break;
        };
        end = part_end;
        parts += 1;
    }
    (parts >= 2).then_some(end)
}

/// `singleEnumValue = enumerationMember / enumMemberValue`
fn single_enum_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    if let Some(member) = odata_identifier(source, index) {
        return Some(member.with_kind(ODataTokenKind::EnumMember));
    }
    int64_value(source, index).map(|value| value.with_kind(ODataTokenKind::EnumMemberValue))
}

/// `enum = qualifiedEnumTypeName SQUOTE enumValue SQUOTE`
///
/// `enumValue = singleEnumValue *( COMMA singleEnumValue )`
pub fn enumeration(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let type_name_end = qualified_name_end(source, index)?;
    let mut cursor = squote(source, type_name_end)?;

    let mut members = ODataTokenVec::new();
    loop {
        let member = single_enum_value(source, cursor)?;
        cursor = member.next();
        members.push(member);
        match comma(source, cursor) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    let end = squote(source, cursor)?;
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::Enum {
            type_name: source_text(source, index, type_name_end)?,
            members,
        },
        ODataTokenKind::Enum,
    ))
}
