use crate::geo::geography_collection;
use crate::geo::geography_line_string;
use crate::geo::geography_multi_line_string;
use crate::geo::geography_multi_point;
use crate::geo::geography_multi_polygon;
use crate::geo::geography_point;
use crate::geo::geography_polygon;
use crate::geo::geometry_collection;
use crate::geo::geometry_line_string;
use crate::geo::geometry_multi_line_string;
use crate::geo::geometry_multi_point;
use crate::geo::geometry_multi_polygon;
use crate::geo::geometry_point;
use crate::geo::geometry_polygon;
use crate::literal::binary_value;
use crate::literal::boolean_value;
use crate::literal::byte_value;
use crate::literal::date_time_offset_value;
use crate::literal::date_value;
use crate::literal::decimal_value;
use crate::literal::double_value;
use crate::literal::duration_value;
use crate::literal::enumeration;
use crate::literal::guid_value;
use crate::literal::int16_value;
use crate::literal::int32_value;
use crate::literal::int64_value;
use crate::literal::null_value;
use crate::literal::sbyte_value;
use crate::literal::single_value;
use crate::literal::string_value;
use crate::literal::time_of_day_value;
use crate::recognizer::NamedRecognizer;
use crate::recognizer::first_match;
use crate::token::ODataToken;

/// The alternatives of `primitiveLiteral`, in evaluation order.
///
/// The order is part of the grammar: the first match wins, so narrower
/// rules sit before the broader rules they overlap with (`decimalValue`
/// before `doubleValue`, `sbyteValue` before `int64Value`, and so on).
pub const PRIMITIVE_LITERAL_ALTERNATIVES: &[NamedRecognizer] = &[
    NamedRecognizer::new("nullValue", null_value),
    NamedRecognizer::new("booleanValue", boolean_value),
    NamedRecognizer::new("guidValue", guid_value),
    NamedRecognizer::new("dateValue", date_value),
    NamedRecognizer::new("dateTimeOffsetValue", date_time_offset_value),
    NamedRecognizer::new("timeOfDayValue", time_of_day_value),
    NamedRecognizer::new("decimalValue", decimal_value),
    NamedRecognizer::new("doubleValue", double_value),
    NamedRecognizer::new("singleValue", single_value),
    NamedRecognizer::new("sbyteValue", sbyte_value),
    NamedRecognizer::new("byteValue", byte_value),
    NamedRecognizer::new("int16Value", int16_value),
    NamedRecognizer::new("int32Value", int32_value),
    NamedRecognizer::new("int64Value", int64_value),
    NamedRecognizer::new("string", string_value),
    NamedRecognizer::new("duration", duration_value),
    NamedRecognizer::new("binary", binary_value),
    NamedRecognizer::new("enum", enumeration),
    NamedRecognizer::new("geographyCollection", geography_collection),
    NamedRecognizer::new("geographyLineString", geography_line_string),
    NamedRecognizer::new("geographyMultiLineString", geography_multi_line_string),
    NamedRecognizer::new("geographyMultiPoint", geography_multi_point),
    NamedRecognizer::new("geographyMultiPolygon", geography_multi_polygon),
    NamedRecognizer::new("geographyPoint", geography_point),
    NamedRecognizer::new("geographyPolygon", geography_polygon),
    NamedRecognizer::new("geometryCollection", geometry_collection),
    NamedRecognizer::new("geometryLineString", geometry_line_string),
    NamedRecognizer::new("geometryMultiLineString", geometry_multi_line_string),
    NamedRecognizer::new("geometryMultiPoint", geometry_multi_point),
    NamedRecognizer::new("geometryMultiPolygon", geometry_multi_polygon),
    NamedRecognizer::new("geometryPoint", geometry_point),
    NamedRecognizer::new("geometryPolygon", geometry_polygon),
];

/// `primitiveLiteral`: the first of [`PRIMITIVE_LITERAL_ALTERNATIVES`]
/// that matches at `index`.
pub fn primitive_literal(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    first_match(source, index, PRIMITIVE_LITERAL_ALTERNATIVES)
}
