/// One representative of each primitive literal form, in dispatch
/// order (so later entries exercise more failed alternatives).
pub const PRIMITIVE_LITERALS: &[(&str, &str)] = &[
    ("null", "null"),
    ("boolean", "false"),
    ("guid", "01234567-89ab-cdef-0123-456789abcdef"),
    ("date", "2024-06-01"),
    ("date_time_offset", "2024-06-01T08:30:00.125+02:00"),
    ("time_of_day", "23:59:59.999"),
    ("decimal", "-12345.6789"),
    ("double", "6.02214076e23"),
    ("int64", "9223372036854775807"),
    ("string", "'O''Reilly Media, Inc.'"),
    ("duration", "duration'P12DT23H59M59.999S'"),
    ("binary", "binary'VGhlIHF1aWNrIGJyb3duIGZveA=='"),
    ("enum", "Org.Sales.Pattern'Red,Blue,4'"),
    ("geography_point", "geography'SRID=4326;Point(-122.335167 47.608013)'"),
    (
        "geometry_polygon",
        "geometry'SRID=0;Polygon((0.0 0.0,10.0 0.0,10.0 10.0,0.0 10.0,0.0 0.0))'",
    ),
];

pub const JSON_VALUES: &[(&str, &str)] = &[
    ("primitive_col", r#"[1, 2.5, -3e2, "four", true, null]"#),
    ("object", r#"{"Name":"Widget","Price":12.5,"Tags":["a","b"]}"#),
    (
        "nested_with_annotation",
        r#"{"@Org.OData.Core.Description":"x","Address":{"City":"Oslo","Zip":"0150"},"Lines":[{"Qty":1},{"Qty":2}]}"#,
    ),
    ("percent_encoded", "%7B%22a%22:%5B1,2,3%5D%7D"),
];

/// A `geography'...Collection(...)'` literal with `points` points,
/// for measuring how list recognition scales.
pub fn geography_collection(points: usize) -> String {
    let body = (0..points)
        .map(|i| format!("Point({i}.5 {i}.25)"))
        .collect::<Vec<_>>()
        .join(",");
    format!("geography'SRID=4326;Collection({body})'")
}

/// A JSON array of `len` objects.
pub fn json_collection(len: usize) -> String {
    let body = (0..len)
        .map(|i| format!(r#"{{"Id":{i},"Name":"item {i}"}}"#))
        .collect::<Vec<_>>()
        .join(",");
    format!("[{body}]")
}
