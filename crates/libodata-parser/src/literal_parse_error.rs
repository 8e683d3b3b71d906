/// Why a buffer is not a complete literal of the requested form.
///
/// Recognizers themselves only report "no match"; this error exists for
/// callers that need the whole input to be one literal (see
/// [`parse_complete()`](crate::parse_complete)).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralParseError {
    /// The recognizer did not match at `offset`.
    #[error("no literal matches at byte offset {offset}")]
    NoMatch { offset: usize },

    /// The recognizer matched `[0, end)` but the buffer continues to
    /// `len`.
    #[error("literal ends at byte offset {end} but the input is {len} bytes long")]
    TrailingInput { end: usize, len: usize },
}
