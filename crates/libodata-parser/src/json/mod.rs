//! JSON literals embedded in a URI.
//!
//! These follow the JSON grammar adapted to URI restrictions: each
//! structural character and the quotation mark also have a
//! percent-encoded form, and whitespace around structural characters
//! may be encoded as `%20`/`%09`.

mod json_primitives;
mod json_structures;

pub use json_primitives::PRIMITIVE_LITERAL_IN_JSON_ALTERNATIVES;
pub use json_primitives::boolean_in_json;
pub use json_primitives::char_in_json;
pub use json_primitives::null_in_json;
pub use json_primitives::number_in_json;
pub use json_primitives::primitive_literal_in_json;
pub use json_primitives::string_in_json;
pub use json_structures::ARRAY_OR_OBJECT_ALTERNATIVES;
pub use json_structures::JSON_VALUE_ALTERNATIVES;
pub use json_structures::annotation_in_uri;
pub use json_structures::annotation_term;
pub use json_structures::array_or_object;
pub use json_structures::begin_array;
pub use json_structures::begin_object;
pub use json_structures::complex_col_in_uri;
pub use json_structures::complex_in_uri;
pub use json_structures::end_array;
pub use json_structures::end_object;
pub use json_structures::json_value;
pub use json_structures::key_value_pair_in_uri;
pub use json_structures::name_separator;
pub use json_structures::primitive_col_in_uri;
pub use json_structures::property_in_uri;
pub use json_structures::value_separator;

#[cfg(test)]
mod tests;
