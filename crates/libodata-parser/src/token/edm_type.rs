use std::fmt;

/// An Entity Data Model primitive type, as named by the type tag a
/// literal token carries.
///
/// The canonical tag (`"Edm.Int32"`, `"Edm.GeographyPoint"`, ...) is
/// available through [`EdmType::as_str()`] and `Display`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum EdmType {
    Binary,
    Boolean,
    Byte,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Duration,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    String,
    TimeOfDay,

    // =========================================================================
    // Geography (round-earth coordinates)
    // =========================================================================
    GeographyCollection,
    GeographyLineString,
    GeographyMultiLineString,
    GeographyMultiPoint,
    GeographyMultiPolygon,
    GeographyPoint,
    GeographyPolygon,

    // =========================================================================
    // Geometry (flat-earth coordinates)
    // =========================================================================
    GeometryCollection,
    GeometryLineString,
    GeometryMultiLineString,
    GeometryMultiPoint,
    GeometryMultiPolygon,
    GeometryPoint,
    GeometryPolygon,
}

impl EdmType {
    /// Returns the canonical, namespace-qualified type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdmType::Binary => "Edm.Binary",
            EdmType::Boolean => "Edm.Boolean",
            EdmType::Byte => "Edm.Byte",
            EdmType::Date => "Edm.Date",
            EdmType::DateTimeOffset => "Edm.DateTimeOffset",
            EdmType::Decimal => "Edm.Decimal",
            EdmType::Double => "Edm.Double",
            EdmType::Duration => "Edm.Duration",
            EdmType::Guid => "Edm.Guid",
            EdmType::Int16 => "Edm.Int16",
            EdmType::Int32 => "Edm.Int32",
            EdmType::Int64 => "Edm.Int64",
            EdmType::SByte => "Edm.SByte",
            EdmType::Single => "Edm.Single",
            EdmType::String => "Edm.String",
            EdmType::TimeOfDay => "Edm.TimeOfDay",
            EdmType::GeographyCollection => "Edm.GeographyCollection",
            EdmType::GeographyLineString => "Edm.GeographyLineString",
            EdmType::GeographyMultiLineString => "Edm.GeographyMultiLineString",
            EdmType::GeographyMultiPoint => "Edm.GeographyMultiPoint",
            EdmType::GeographyMultiPolygon => "Edm.GeographyMultiPolygon",
            EdmType::GeographyPoint => "Edm.GeographyPoint",
            EdmType::GeographyPolygon => "Edm.GeographyPolygon",
            EdmType::GeometryCollection => "Edm.GeometryCollection",
            EdmType::GeometryLineString => "Edm.GeometryLineString",
            EdmType::GeometryMultiLineString => "Edm.GeometryMultiLineString",
            EdmType::GeometryMultiPoint => "Edm.GeometryMultiPoint",
            EdmType::GeometryMultiPolygon => "Edm.GeometryMultiPolygon",
            EdmType::GeometryPoint => "Edm.GeometryPoint",
            EdmType::GeometryPolygon => "Edm.GeometryPolygon",
        }
    }

    /// Returns `true` for the fourteen Geography*/Geometry* types.
    pub fn is_spatial(&self) -> bool {
        matches!(
            self,
            EdmType::GeographyCollection
                | EdmType::GeographyLineString
                | EdmType::GeographyMultiLineString
                | EdmType::GeographyMultiPoint
                | EdmType::GeographyMultiPolygon
                | EdmType::GeographyPoint
                | EdmType::GeographyPolygon
                | EdmType::GeometryCollection
                | EdmType::GeometryLineString
                | EdmType::GeometryMultiLineString
                | EdmType::GeometryMultiPoint
                | EdmType::GeometryMultiPolygon
                | EdmType::GeometryPoint
                | EdmType::GeometryPolygon
        )
    }
}

impl fmt::Display for EdmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
