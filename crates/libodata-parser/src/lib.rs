//! A byte-level recognizer for OData literal values: the EDM primitive
//! literals (numbers, strings, dates, durations, binary, GUIDs,
//! enumerations), geography and geometry literals, and JSON values
//! embedded in a URI.
//!
//! Every grammar rule is a plain function with the [`Recognizer`]
//! signature: it takes the source buffer and an offset and returns the
//! [`ODataToken`](token::ODataToken) matched at exactly that offset, or
//! `None`. A failed recognizer has no effect, so rules compose freely
//! with unlimited backtracking.
//!
//! [`Recognizer`]: recognizer::Recognizer

mod byte_span;
pub mod geo;
pub mod json;
pub mod lexer;
pub mod literal;
mod literal_parse_error;
mod parse;
pub mod recognizer;
pub mod token;

pub use byte_span::ByteSpan;
pub use literal_parse_error::LiteralParseError;
pub use parse::parse_complete;
pub use parse::parse_json_value;
pub use parse::parse_primitive_literal;
