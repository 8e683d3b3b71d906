//! JSON objects and arrays embedded in a URI (`complexInUri`,
//! `primitiveColInUri`, ...) and the `arrayOrObject` dispatcher.
//!
//! Only the metadata-free forms are recognized: an object member is an
//! annotation or a property whose name is any identifier, and property
//! values are resolved by shape rather than by declared type.

use crate::json::primitive_literal_in_json;
use crate::lexer::at;
use crate::lexer::bws;
use crate::lexer::colon;
use crate::lexer::comma;
use crate::lexer::delimiters::raw_or_encoded;
use crate::lexer::quotation_mark;
use crate::literal::odata_identifier;
use crate::literal::qualified_name_end;
use crate::recognizer::NamedRecognizer;
use crate::recognizer::Recognizer;
use crate::recognizer::RecursionGuard;
use crate::recognizer::first_match;
use crate::token::ODataToken;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use crate::token::ODataTokenVec;
use crate::token::source_text;
use crate::token::tokenize;

// =========================================================================
// Structural delimiters
// =========================================================================

/// `begin-object = BWS ( "{" / "%7B" ) BWS`
pub fn begin_object(source: &[u8], index: usize) -> Option<usize> {
    let next = raw_or_encoded(source, bws(source, index), b'{', b"7B")?;
    Some(bws(source, next))
}

/// `end-object = BWS ( "}" / "%7D" )`
pub fn end_object(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, bws(source, index), b'}', b"7D")
}

/// `begin-array = BWS ( "[" / "%5B" ) BWS`
pub fn begin_array(source: &[u8], index: usize) -> Option<usize> {
    let next = raw_or_encoded(source, bws(source, index), b'[', b"5B")?;
    Some(bws(source, next))
}

/// `end-array = BWS ( "]" / "%5D" )`
pub fn end_array(source: &[u8], index: usize) -> Option<usize> {
    raw_or_encoded(source, bws(source, index), b']', b"5D")
}

/// `name-separator = BWS COLON BWS`
pub fn name_separator(source: &[u8], index: usize) -> Option<usize> {
    let next = colon(source, bws(source, index))?;
    Some(bws(source, next))
}

/// `value-separator = BWS COMMA BWS`
pub fn value_separator(source: &[u8], index: usize) -> Option<usize> {
    let next = comma(source, bws(source, index))?;
    Some(bws(source, next))
}

// =========================================================================
// Members
// =========================================================================

/// `quotation-mark key quotation-mark name-separator value`
///
/// The key and value grammars are supplied by the caller. The token has
/// kind `Property` and a `KeyValue` value.
pub fn key_value_pair_in_uri<'src>(
    source: &'src [u8],
    index: usize,
    key_fn: Recognizer,
    value_fn: Recognizer,
) -> Option<ODataToken<'src>> {
    let key = key_fn(source, quotation_mark(source, index)?)?;
    let after_key = quotation_mark(source, key.next())?;
    let value = value_fn(source, name_separator(source, after_key)?)?;
    let end = value.next();
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::KeyValue {
            key: Box::new(key),
            value: Box::new(value),
        },
        ODataTokenKind::Property,
    ))
}

/// `AT namespace "." termName`
///
/// The value is the qualified term name without the `@`.
pub fn annotation_term(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let name_start = at(source, index)?;
    let end = qualified_name_end(source, name_start)?;
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::Identifier(source_text(source, name_start, end)?),
        ODataTokenKind::AnnotationTerm,
    ))
}

/// The alternatives of a member value, in evaluation order.
pub const JSON_VALUE_ALTERNATIVES: &[NamedRecognizer] = &[
    NamedRecognizer::new("complexInUri", complex_in_uri),
    NamedRecognizer::new("complexColInUri", complex_col_in_uri),
    NamedRecognizer::new("primitiveLiteralInJSON", primitive_literal_in_json),
    NamedRecognizer::new("primitiveColInUri", primitive_col_in_uri),
];

/// `complexInUri / complexColInUri / primitiveLiteralInJSON /
/// primitiveColInUri`
pub fn json_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    first_match(source, index, JSON_VALUE_ALTERNATIVES)
}

/// `annotationInUri = quotation-mark AT namespace "." termName
/// quotation-mark name-separator ( complexInUri / complexColInUri /
/// primitiveLiteralInJSON / primitiveColInUri )`
pub fn annotation_in_uri(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    key_value_pair_in_uri(source, index, annotation_term, json_value)
        .map(|pair| pair.with_kind(ODataTokenKind::Annotation))
}

/// `quotation-mark odataIdentifier quotation-mark name-separator value`
pub fn property_in_uri(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    key_value_pair_in_uri(source, index, odata_identifier, json_value)
}

fn member_in_uri(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    annotation_in_uri(source, index).or_else(|| property_in_uri(source, index))
}

// =========================================================================
// Objects and arrays
// =========================================================================

/// `begin [ item *( value-separator item ) ] end`, returning the
/// offset after `end` and the items in source order.
fn delimited_items<'src>(
    source: &'src [u8],
    index: usize,
    begin: fn(&[u8], usize) -> Option<usize>,
    item: Recognizer,
    end: fn(&[u8], usize) -> Option<usize>,
) -> Option<(usize, ODataTokenVec<'src>)> {
    let mut cursor = begin(source, index)?;
    let mut items = ODataTokenVec::new();
    if let Some(after_end) = end(source, cursor) {
        return Some((after_end, items));
    }
    loop {
        let token = item(source, cursor)?;
        cursor = token.next();
        items.push(token);

        if let Some(after_end) = end(source, cursor) {
            return Some((after_end, items));
        }
        cursor = value_separator(source, cursor)?;
    }
}

fn structure<'src>(
    source: &'src [u8],
    index: usize,
    (next, items): (usize, ODataTokenVec<'src>),
    kind: ODataTokenKind,
) -> ODataToken<'src> {
    tokenize(source, index, next, ODataTokenValue::Items(items), kind)
}

/// `complexInUri = begin-object [ member *( value-separator member ) ]
/// end-object`
///
/// Objects nested deeper than
/// [`MAX_RECURSION_DEPTH`](crate::recognizer::MAX_RECURSION_DEPTH) are no
/// match.
pub fn complex_in_uri(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let _guard = RecursionGuard::enter()?;
    let body = delimited_items(source, index, begin_object, member_in_uri, end_object)?;
    Some(structure(source, index, body, ODataTokenKind::Object))
}

/// `complexColInUri = begin-array [ complexInUri *( value-separator
/// complexInUri ) ] end-array`
pub fn complex_col_in_uri(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let body = delimited_items(source, index, begin_array, complex_in_uri, end_array)?;
    Some(structure(source, index, body, ODataTokenKind::Array))
}

/// `primitiveColInUri = begin-array [ primitiveLiteralInJSON *(
/// value-separator primitiveLiteralInJSON ) ] end-array`
pub fn primitive_col_in_uri(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let body = delimited_items(source, index, begin_array, primitive_literal_in_json, end_array)?;
    Some(structure(source, index, body, ODataTokenKind::Array))
}

/// The alternatives of `arrayOrObject`, in evaluation order.
pub const ARRAY_OR_OBJECT_ALTERNATIVES: &[NamedRecognizer] = &[
    NamedRecognizer::new("complexColInUri", complex_col_in_uri),
    NamedRecognizer::new("complexInUri", complex_in_uri),
    NamedRecognizer::new("primitiveColInUri", primitive_col_in_uri),
];

/// `arrayOrObject = complexColInUri / complexInUri / primitiveColInUri`
///
/// The matched structure is wrapped in an `ArrayOrObject` token with
/// the same span.
pub fn array_or_object(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let inner = first_match(source, index, ARRAY_OR_OBJECT_ALTERNATIVES)?;
    let end = inner.next();
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::Nested(Box::new(inner)),
        ODataTokenKind::ArrayOrObject,
    ))
}
