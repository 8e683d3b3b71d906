//! The coordinate-level pieces of spatial literals: positions, point
//! data, line strings, rings, polygons and the SRID prefix.

use crate::geo::multi_geo_literal;
use crate::lexer::byte_is;
use crate::lexer::close;
use crate::lexer::eq;
use crate::lexer::exact;
use crate::lexer::is_digit;
use crate::lexer::is_sp;
use crate::lexer::open;
use crate::lexer::required;
use crate::lexer::semi;
use crate::literal::double_value;
use crate::token::ODataToken;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use crate::token::tokenize;

/// `positionLiteral = doubleValue SP doubleValue` (longitude, then
/// latitude), separated by exactly one raw space.
pub fn position_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let longitude = double_value(source, index)?;
    if !byte_is(source, longitude.next(), is_sp) {
        return None;
    }
    let latitude = double_value(source, longitude.next() + 1)?;
    let end = latitude.next();
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::Position {
            longitude: Box::new(longitude),
            latitude: Box::new(latitude),
        },
        ODataTokenKind::Literal,
    ))
}

/// `pointData = OPEN positionLiteral CLOSE`
pub fn point_data(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let position_start = open(source, index)?;
    let position = position_literal(source, position_start)?;
    let end = close(source, position.next())?;
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::Nested(Box::new(position)),
        ODataTokenKind::Literal,
    ))
}

/// `lineStringData = OPEN positionLiteral *( COMMA positionLiteral ) CLOSE`
pub fn line_string_data(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    multi_geo_literal(source, index, "", position_literal)
}

/// `ringLiteral = OPEN positionLiteral *( COMMA positionLiteral ) CLOSE`
///
/// The grammar also asks for the first and last positions to match and
/// for a winding order; both are semantic constraints and are not
/// checked here.
pub fn ring_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    multi_geo_literal(source, index, "", position_literal)
}

/// `polygonData = OPEN ringLiteral *( COMMA ringLiteral ) CLOSE`
pub fn polygon_data(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    multi_geo_literal(source, index, "", ring_literal)
}

/// `sridLiteral = "SRID" EQ 1*5DIGIT SEMI`
///
/// The value is the numeric SRID.
pub fn srid_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let digits_start = eq(source, exact(source, index, "SRID")?)?;
    let digits_end = required(source, digits_start, is_digit, 1, Some(5))?;
    let end = semi(source, digits_end)?;
    // At most five digits, so this cannot overflow.
    let srid = source[digits_start..digits_end]
        .iter()
        .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));
    Some(tokenize(source, index, end, ODataTokenValue::Srid(srid), ODataTokenKind::Literal))
}
