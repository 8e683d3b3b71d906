use crate::token::EdmType;

/// Verifies the canonical tag strings of a few primitive types.
#[test]
fn primitive_tags_are_edm_qualified() {
    assert_eq!(EdmType::Int32.as_str(), "Edm.Int32");
    assert_eq!(EdmType::SByte.as_str(), "Edm.SByte");
    assert_eq!(EdmType::DateTimeOffset.as_str(), "Edm.DateTimeOffset");
    assert_eq!(EdmType::Guid.to_string(), "Edm.Guid");
}

/// Verifies the tag strings of spatial types and that they report
/// themselves as spatial.
#[test]
fn spatial_tags() {
    assert_eq!(EdmType::GeographyPoint.as_str(), "Edm.GeographyPoint");
    assert_eq!(EdmType::GeometryMultiPolygon.as_str(), "Edm.GeometryMultiPolygon");
    assert!(EdmType::GeographyCollection.is_spatial());
    assert!(EdmType::GeometryLineString.is_spatial());
    assert!(!EdmType::Double.is_spatial());
}
