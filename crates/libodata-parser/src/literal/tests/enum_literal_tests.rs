use crate::literal::enumeration;
use crate::literal::odata_identifier;
use crate::token::EdmType;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;

/// Verifies that an identifier token carries its name.
#[test]
fn identifier_token() {
    let token = odata_identifier(b"Name eq", 0).unwrap();
    assert_eq!(token.kind, ODataTokenKind::Identifier);
    assert_eq!(token.next(), 4);
    assert_eq!(token.value, ODataTokenValue::Identifier("Name".into()));
}

/// Verifies a single symbolic member.
#[test]
fn enum_single_member() {
    let source = b"NS.Color'Red'";
    let token = enumeration(source, 0).unwrap();
    assert_eq!(token.kind, ODataTokenKind::Enum);
    assert_eq!(token.next(), source.len());
    let ODataTokenValue::Enum { type_name, members } = &token.value else {
        panic!("expected an enum value, got {:?}", token.value);
    };
    assert_eq!(type_name, "NS.Color");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].kind, ODataTokenKind::EnumMember);
    assert_eq!(members[0].text(source), b"Red");
}

/// Verifies flag combinations mixing symbolic and numeric members.
#[test]
fn enum_flag_members() {
    let source = b"Org.Sales.Pattern'Red,4,Blue'";
    let token = enumeration(source, 0).unwrap();
    assert_eq!(token.next(), source.len());
    let ODataTokenValue::Enum { type_name, members } = &token.value else {
        panic!("expected an enum value, got {:?}", token.value);
    };
    assert_eq!(type_name, "Org.Sales.Pattern");
    let kinds: Vec<_> = members.iter().map(|member| member.kind).collect();
    assert_eq!(
        kinds,
        [
            ODataTokenKind::EnumMember,
            ODataTokenKind::EnumMemberValue,
            ODataTokenKind::EnumMember,
        ],
    );
    assert_eq!(members[1].edm_type(), Some(EdmType::Int64));
}

/// Verifies that the type name must be qualified and the body must be
/// quoted and non-empty.
#[test]
fn enum_rejections() {
    assert!(enumeration(b"Color'Red'", 0).is_none());
    assert!(enumeration(b"NS.Color'Red", 0).is_none());
    assert!(enumeration(b"NS.Color''", 0).is_none());
    assert!(enumeration(b"NS.Color'Red,'", 0).is_none());
}
