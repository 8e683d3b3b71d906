//! Recognizers for the EDM primitive literal forms and the
//! `primitiveLiteral` dispatcher.
//!
//! Each recognizer matches exactly one literal form starting exactly at
//! the given offset; none of them skips leading whitespace.

mod binary_literal;
mod decimal_literals;
mod duration_literal;
mod enum_literal;
mod guid_literal;
mod integer_literals;
mod keyword_literals;
mod primitive_literal;
mod string_literal;
mod temporal_literals;

pub use binary_literal::binary_value;
pub use decimal_literals::decimal_value;
pub use decimal_literals::double_value;
pub use decimal_literals::single_value;
pub use duration_literal::duration_value;
pub use enum_literal::enumeration;
pub use enum_literal::odata_identifier;
pub(crate) use enum_literal::qualified_name_end;
pub use guid_literal::guid_value;
pub use integer_literals::byte_value;
pub use integer_literals::int16_value;
pub use integer_literals::int32_value;
pub use integer_literals::int64_value;
pub use integer_literals::sbyte_value;
pub use keyword_literals::boolean_value;
pub use keyword_literals::null_value;
pub use primitive_literal::PRIMITIVE_LITERAL_ALTERNATIVES;
pub use primitive_literal::primitive_literal;
pub use string_literal::string_value;
pub use temporal_literals::date_time_offset_value;
pub use temporal_literals::date_value;
pub use temporal_literals::time_of_day_value;

use crate::token::EdmType;
use crate::token::ODataToken;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use crate::token::tokenize;

/// Builds a `Literal` token tagged with `edm_type`.
#[inline]
pub(crate) fn edm_literal<'src>(
    source: &[u8],
    start: usize,
    next: usize,
    edm_type: EdmType,
) -> ODataToken<'src> {
    tokenize(source, start, next, ODataTokenValue::Edm(edm_type), ODataTokenKind::Literal)
}

#[cfg(test)]
mod tests;
