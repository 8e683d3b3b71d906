use crate::lexer::exact;
use crate::literal::edm_literal;
use crate::token::EdmType;
use crate::token::ODataToken;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use crate::token::tokenize;

/// `nullValue = 'null'`
pub fn null_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let next = exact(source, index, "null")?;
    Some(tokenize(source, index, next, ODataTokenValue::Null, ODataTokenKind::Literal))
}

/// `booleanValue = "true" / "false"`
pub fn boolean_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let next = exact(source, index, "true").or_else(|| exact(source, index, "false"))?;
    Some(edm_literal(source, index, next, EdmType::Boolean))
}
