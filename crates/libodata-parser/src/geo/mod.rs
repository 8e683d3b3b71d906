//! Geography and geometry literals.
//!
//! These form a small well-known-text grammar: positions compose into
//! points, line strings and rings; rings into polygons; and any of them
//! into `Multi*` lists and collections. List-shaped rules are built from
//! [`multi_geo_literal()`] and [`multi_geo_literal_optional()`]
//! parameterized with the item rule.

mod geo_data;
mod geo_factories;
mod geo_literals;
mod typed_geo_literals;

pub use geo_data::line_string_data;
pub use geo_data::point_data;
pub use geo_data::polygon_data;
pub use geo_data::position_literal;
pub use geo_data::ring_literal;
pub use geo_data::srid_literal;
pub use geo_factories::full_geo_literal;
pub use geo_factories::multi_geo_literal;
pub use geo_factories::multi_geo_literal_optional;
pub use geo_factories::typed_geo_literal;
pub use geo_literals::GEO_LITERAL_ALTERNATIVES;
pub use geo_literals::collection_literal;
pub use geo_literals::full_collection_literal;
pub use geo_literals::full_line_string_literal;
pub use geo_literals::full_multi_line_string_literal;
pub use geo_literals::full_multi_point_literal;
pub use geo_literals::full_multi_polygon_literal;
pub use geo_literals::full_point_literal;
pub use geo_literals::full_polygon_literal;
pub use geo_literals::geo_literal;
pub use geo_literals::line_string_literal;
pub use geo_literals::multi_line_string_literal;
pub use geo_literals::multi_point_literal;
pub use geo_literals::multi_polygon_literal;
pub use geo_literals::point_literal;
pub use geo_literals::polygon_literal;
pub use typed_geo_literals::*;

#[cfg(test)]
mod tests;
