//! Character-class primitives and fixed-grammar micro-parsers.
//!
//! Everything here works on a borrowed byte buffer and an offset, and
//! reports success as the offset after the match (`Some(next)`) or
//! failure as `None`. Nothing here builds tokens; the literal
//! recognizers in [`crate::literal`], [`crate::geo`] and
//! [`crate::json`] are built from these pieces.

pub mod byte_class;
pub mod calendar;
pub mod delimiters;
pub mod fragments;
pub mod repetition;

pub use byte_class::*;
pub use calendar::*;
pub use delimiters::*;
pub use fragments::*;
pub use repetition::*;
