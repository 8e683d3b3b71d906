//! This module provides the token types every recognizer produces.

mod edm_type;
mod json_primitive;
mod odata_token;
mod odata_token_kind;
mod odata_token_value;

pub use edm_type::EdmType;
pub use json_primitive::JsonPrimitive;
pub use odata_token::ODataToken;
pub use odata_token::source_text;
pub use odata_token::tokenize;
pub use odata_token_kind::ODataTokenKind;
pub use odata_token_value::ODataTokenValue;
pub use odata_token_value::ODataTokenVec;

#[cfg(test)]
mod tests;
