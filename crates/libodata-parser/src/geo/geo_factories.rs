//! Higher-order building blocks shared by the spatial literal rules.

use crate::lexer::byte_at;
use crate::lexer::close;
use crate::lexer::comma;
use crate::lexer::exact;
use crate::lexer::squote;
use crate::literal::edm_literal;
use crate::recognizer::Recognizer;
use crate::token::EdmType;
use crate::token::ODataToken;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use crate::token::ODataTokenVec;
use crate::token::tokenize;

/// Matches `prefix` followed by a raw `(`, returning the offset after
/// the parenthesis.
fn prefix_and_open(source: &[u8], index: usize, prefix: &str) -> Option<usize> {
    let after_prefix = exact(source, index, prefix)?;
    (byte_at(source, after_prefix)? == b'(').then_some(after_prefix + 1)
}

/// Matches `item *( COMMA item ) CLOSE` starting at `cursor`, pushing
/// each item onto `items`. Returns the offset after the `CLOSE`.
fn items_until_close<'src>(
    source: &'src [u8],
    mut cursor: usize,
    item: Recognizer,
    items: &mut ODataTokenVec<'src>,
) -> Option<usize> {
    loop {
        let token = item(source, cursor)?;
        cursor = token.next();
        items.push(token);

        if let Some(after_close) = close(source, cursor) {
            return Some(after_close);
        }
        cursor = comma(source, cursor)?;
    }
}

/// `prefix "(" item *( COMMA item ) CLOSE`, with at least one item.
///
/// The value is `Items` in source order.
pub fn multi_geo_literal<'src>(
    source: &'src [u8],
    index: usize,
    prefix: &str,
    item: Recognizer,
) -> Option<ODataToken<'src>> {
    let cursor = prefix_and_open(source, index, prefix)?;
    let mut items = ODataTokenVec::new();
    let end = items_until_close(source, cursor, item, &mut items)?;
    Some(tokenize(source, index, end, ODataTokenValue::Items(items), ODataTokenKind::Literal))
}

/// `prefix "(" [ item *( COMMA item ) ] CLOSE`.
///
/// An empty body is a match whose `Items` list is empty.
pub fn multi_geo_literal_optional<'src>(
    source: &'src [u8],
    index: usize,
    prefix: &str,
    item: Recognizer,
) -> Option<ODataToken<'src>> {
    let cursor = prefix_and_open(source, index, prefix)?;
    let mut items = ODataTokenVec::new();
    let end = match close(source, cursor) {
        Some(after_close) => after_close,
        None => items_until_close(source, cursor, item, &mut items)?,
    };
    Some(tokenize(source, index, end, ODataTokenValue::Items(items), ODataTokenKind::Literal))
}

/// `sridLiteral literal`: a spatial literal qualified by its SRID.
pub fn full_geo_literal<'src>(
    source: &'src [u8],
    index: usize,
    literal: Recognizer,
) -> Option<ODataToken<'src>> {
    let srid = crate::geo::srid_literal(source, index)?;
    let value = literal(source, srid.next())?;
    let end = value.next();
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::FullGeo {
            srid: Box::new(srid),
            value: Box::new(value),
        },
        ODataTokenKind::Literal,
    ))
}

/// `prefix SQUOTE fullLiteral SQUOTE`, tagged `edm_type`.
///
/// `prefix` is [`geography_prefix`](crate::lexer::geography_prefix) or
/// [`geometry_prefix`](crate::lexer::geometry_prefix).
pub fn typed_geo_literal(
    source: &[u8],
    index: usize,
    edm_type: EdmType,
    prefix: fn(&[u8], usize) -> Option<usize>,
    full_literal: Recognizer,
) -> Option<ODataToken<'_>> {
    let after_prefix = prefix(source, index)?;
    let body_start = squote(source, after_prefix)?;
    let body = full_literal(source, body_start)?;
    let end = squote(source, body.next())?;
    Some(edm_literal(source, index, end, edm_type))
}
