//! Named spatial literals (`Point(...)`, `MultiPolygon(...)`, ...), their
//! SRID-qualified forms, and the `geoLiteral` dispatcher.

use crate::geo::full_geo_literal;
use crate::geo::line_string_data;
use crate::geo::multi_geo_literal;
use crate::geo::multi_geo_literal_optional;
use crate::geo::point_data;
use crate::geo::polygon_data;
use crate::lexer::exact;
use crate::recognizer::NamedRecognizer;
use crate::recognizer::RecursionGuard;
use crate::recognizer::Recognizer;
use crate::recognizer::first_match;
use crate::token::ODataToken;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use crate::token::tokenize;

/// `keyword data`, wrapping the data token.
fn keyword_literal<'src>(
    source: &'src [u8],
    index: usize,
    keyword: &str,
    data: Recognizer,
) -> Option<ODataToken<'src>> {
    let data = data(source, exact(source, index, keyword)?)?;
    let end = data.next();
    Some(tokenize(
        source,
        index,
        end,
        ODataTokenValue::Nested(Box::new(data)),
        ODataTokenKind::Literal,
    ))
}

/// `pointLiteral = "Point" pointData`
pub fn point_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    keyword_literal(source, index, "Point", point_data)
}

/// `polygonLiteral = "Polygon" polygonData`
pub fn polygon_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    keyword_literal(source, index, "Polygon", polygon_data)
}

/// `lineStringLiteral = "LineString" lineStringData`
pub fn line_string_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    keyword_literal(source, index, "LineString", line_string_data)
}

/// `collectionLiteral = "Collection(" geoLiteral *( COMMA geoLiteral ) CLOSE`
///
/// Collections nested deeper than
/// [`MAX_RECURSION_DEPTH`](crate::recognizer::MAX_RECURSION_DEPTH) are no
/// match.
pub fn collection_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let _guard = RecursionGuard::enter()?;
    multi_geo_literal(source, index, "Collection", geo_literal)
}

/// `multiLineStringLiteral = "MultiLineString(" [ lineStringData *(
/// COMMA lineStringData ) ] CLOSE`
pub fn multi_line_string_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    multi_geo_literal_optional(source, index, "MultiLineString", line_string_data)
}

/// `multiPointLiteral = "MultiPoint(" [ pointData *( COMMA pointData ) ]
/// CLOSE`
pub fn multi_point_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    multi_geo_literal_optional(source, index, "MultiPoint", point_data)
}

/// `multiPolygonLiteral = "MultiPolygon(" [ polygonData *( COMMA
/// polygonData ) ] CLOSE`
pub fn multi_polygon_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    multi_geo_literal_optional(source, index, "MultiPolygon", polygon_data)
}

/// The alternatives of `geoLiteral`, in evaluation order. The
/// `Multi*` forms are tried before the `Point`/`Polygon` forms.
pub const GEO_LITERAL_ALTERNATIVES: &[NamedRecognizer] = &[
    NamedRecognizer::new("collectionLiteral", collection_literal),
    NamedRecognizer::new("lineStringLiteral", line_string_literal),
    NamedRecognizer::new("multiPointLiteral", multi_point_literal),
    NamedRecognizer::new("multiLineStringLiteral", multi_line_string_literal),
    NamedRecognizer::new("multiPolygonLiteral", multi_polygon_literal),
    NamedRecognizer::new("pointLiteral", point_literal),
    NamedRecognizer::new("polygonLiteral", polygon_literal),
];

/// `geoLiteral`: the first of [`GEO_LITERAL_ALTERNATIVES`] that
/// matches at `index`.
pub fn geo_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    first_match(source, index, GEO_LITERAL_ALTERNATIVES)
}

/// `fullPointLiteral = sridLiteral pointLiteral`
pub fn full_point_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    full_geo_literal(source, index, point_literal)
}

/// `fullCollectionLiteral = sridLiteral collectionLiteral`
pub fn full_collection_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    full_geo_literal(source, index, collection_literal)
}

/// `fullLineStringLiteral = sridLiteral lineStringLiteral`
pub fn full_line_string_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    full_geo_literal(source, index, line_string_literal)
}

/// `fullMultiLineStringLiteral = sridLiteral multiLineStringLiteral`
pub fn full_multi_line_string_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    full_geo_literal(source, index, multi_line_string_literal)
}

/// `fullMultiPointLiteral = sridLiteral multiPointLiteral`
pub fn full_multi_point_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    full_geo_literal(source, index, multi_point_literal)
}

/// `fullMultiPolygonLiteral = sridLiteral multiPolygonLiteral`
pub fn full_multi_polygon_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    full_geo_literal(source, index, multi_polygon_literal)
}

/// `fullPolygonLiteral = sridLiteral polygonLiteral`
pub fn full_polygon_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    full_geo_literal(source, index, polygon_literal)
}
