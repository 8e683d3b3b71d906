//! Typed spatial literals: `geography'SRID=...;...'` and
//! `geometry'SRID=...;...'`.

use crate::geo::full_collection_literal;
use crate::geo::full_line_string_literal;
use crate::geo::full_multi_line_string_literal;
use crate::geo::full_multi_point_literal;
use crate::geo::full_multi_polygon_literal;
use crate::geo::full_point_literal;
use crate::geo::full_polygon_literal;
use crate::geo::typed_geo_literal;
use crate::lexer::geography_prefix;
use crate::lexer::geometry_prefix;
use crate::token::EdmType;
use crate::token::ODataToken;

/// `geographyCollection = geographyPrefix SQUOTE fullCollectionLiteral SQUOTE`
pub fn geography_collection(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeographyCollection,
        geography_prefix,
        full_collection_literal,
    )
}

/// `geographyLineString = geographyPrefix SQUOTE fullLineStringLiteral SQUOTE`
pub fn geography_line_string(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeographyLineString,
        geography_prefix,
        full_line_string_literal,
    )
}

/// `geographyMultiLineString = geographyPrefix SQUOTE fullMultiLineStringLiteral SQUOTE`
pub fn geography_multi_line_string(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeographyMultiLineString,
        geography_prefix,
        full_multi_line_string_literal,
    )
}

/// `geographyMultiPoint = geographyPrefix SQUOTE fullMultiPointLiteral SQUOTE`
pub fn geography_multi_point(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeographyMultiPoint,
        geography_prefix,
        full_multi_point_literal,
    )
}

/// `geographyMultiPolygon = geographyPrefix SQUOTE fullMultiPolygonLiteral SQUOTE`
pub fn geography_multi_polygon(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeographyMultiPolygon,
        geography_prefix,
        full_multi_polygon_literal,
    )
}

/// `geographyPoint = geographyPrefix SQUOTE fullPointLiteral SQUOTE`
pub fn geography_point(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeographyPoint,
        geography_prefix,
        full_point_literal,
    )
}

/// `geographyPolygon = geographyPrefix SQUOTE fullPolygonLiteral SQUOTE`
pub fn geography_polygon(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeographyPolygon,
        geography_prefix,
        full_polygon_literal,
    )
}

/// `geometryCollection = geometryPrefix SQUOTE fullCollectionLiteral SQUOTE`
pub fn geometry_collection(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeometryCollection,
        geometry_prefix,
        full_collection_literal,
    )
}

/// `geometryLineString = geometryPrefix SQUOTE fullLineStringLiteral SQUOTE`
pub fn geometry_line_string(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeometryLineString,
        geometry_prefix,
        full_line_string_literal,
    )
}

/// `geometryMultiLineString = geometryPrefix SQUOTE fullMultiLineStringLiteral SQUOTE`
pub fn geometry_multi_line_string(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeometryMultiLineString,
        geometry_prefix,
        full_multi_line_string_literal,
    )
}

/// `geometryMultiPoint = geometryPrefix SQUOTE fullMultiPointLiteral SQUOTE`
pub fn geometry_multi_point(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeometryMultiPoint,
        geometry_prefix,
        full_multi_point_literal,
    )
}

/// `geometryMultiPolygon = geometryPrefix SQUOTE fullMultiPolygonLiteral SQUOTE`
pub fn geometry_multi_polygon(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeometryMultiPolygon,
        geometry_prefix,
        full_multi_polygon_literal,
    )
}

/// `geometryPoint = geometryPrefix SQUOTE fullPointLiteral SQUOTE`
pub fn geometry_point(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeometryPoint,
        geometry_prefix,
        full_point_literal,
    )
}

/// `geometryPolygon = geometryPrefix SQUOTE fullPolygonLiteral SQUOTE`
pub fn geometry_polygon(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    typed_geo_literal(
        source,
        index,
        EdmType::GeometryPolygon,
        geometry_prefix,
        full_polygon_literal,
    )
}
